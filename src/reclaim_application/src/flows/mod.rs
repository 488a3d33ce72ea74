pub mod request_otp;
pub mod reset_password;
pub mod verify_email;
