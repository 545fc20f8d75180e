pub trait Sender {
    fn setup(&self) -> anyhow::Result<()>;
    fn send(&self, data: String) -> anyhow::Result<()>;
}
