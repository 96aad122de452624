#[derive(Clone, Copy)]
pub enum ExitCode {
    SetAuthToken = 2,
    Api = 3,
    SerializationFailed = 4,
}
