mod destinations;
mod helper;
mod info_requests;
