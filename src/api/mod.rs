pub mod twilio_api;
