use std::path::Path;

use anyhow::Context;

use crate::controller::Attachment;

/// Read a file from disk into an upload-ready attachment.
pub fn read_attachment(path: &str) -> anyhow::Result<Attachment> {
    let path = Path::new(path);
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .context("attachment path has no file name")?
        .to_string();
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(Attachment { file_name, bytes })
}

#[cfg(test)]
mod tests {
    use super::read_attachment;

    #[test]
    fn reads_name_and_bytes() {
        let dir = std::env::temp_dir().join("avp-attachment-test");
        std::fs::create_dir_all(&dir).expect("mkdir");
        let path = dir.join("proof.png");
        std::fs::write(&path, [1u8, 2, 3]).expect("write");

        let attachment =
            read_attachment(path.to_str().expect("utf8 path")).expect("should read");
        assert_eq!(attachment.file_name, "proof.png");
        assert_eq!(attachment.bytes, vec![1, 2, 3]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        let error = read_attachment("/definitely/not/here.bin").expect_err("should fail");
        assert!(error.to_string().contains("failed to read"));
    }
}
