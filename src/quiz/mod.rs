pub mod session;


pub use session::{ LastAnswer, QuizSession, SubmitError };
