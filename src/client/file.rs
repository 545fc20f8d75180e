use super::sender::Sender;
use anyhow::anyhow;
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

#[derive(Debug)]
pub struct FileSender {
    path: PathBuf,
    file: File,
}

impl FileSender {
    pub fn new(path: &Path) -> anyhow::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|err| anyhow!("failed to open output file {}: {err}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }
}

impl Sender for FileSender {
    fn setup(&self) -> anyhow::Result<()> {
        log::debug!("egress to file {}", self.path.display());
        Ok(())
    }

    fn send(&self, data: String) -> anyhow::Result<()> {
        // &File implements Write, appends are serialized by the OS
        let mut file = &self.file;
        writeln!(file, "{data}")?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    #[test]
    fn send_appends_lines_should_ok() {
        let path = std::env::temp_dir().join(format!(
            "sht31_uplink_file_sender_{}.jsonl",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        let sender = FileSender::new(&path).unwrap();
        sender.setup().unwrap();
        sender.send("first".to_string()).unwrap();
        sender.send("second".to_string()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");

        let _ = fs::remove_file(&path);
    }
}
