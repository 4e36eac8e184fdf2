pub fn model_url(inference_url: &str, model: &str) -> String {
    [inference_url, "/models/", model].concat()
}
