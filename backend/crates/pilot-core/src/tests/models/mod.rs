mod pilot_request;
mod user;
