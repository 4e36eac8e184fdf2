use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub inputs: String,
    pub parameters: InputSpecParams,
}

#[derive(Debug, Serialize)]
pub struct InputSpecParams {
    pub width: u32,
    pub height: u32,
}
