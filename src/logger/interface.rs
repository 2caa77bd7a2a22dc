pub trait Logger: Send + Sync {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error>>;
    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error>>;
    fn with_namespace(&self, namespace: &str) -> Box<dyn Logger>;
}
