use std::time::Duration;

pub static GENERATE_PATH: &str = "/generate";
pub static RESULT_PATH: &str = "/result";
pub static CALL_ID_PARAM: &str = "call_id";
pub static ELAPSED_TIME_HEADER: &str = "X-Elapsed-Time";
// Upper bound for a single submit or poll round trip.
pub static REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
