use crate::domain::ports::KnowledgeSource;
use crate::utils::error::Result;
use std::path::PathBuf;

/// 從本地純文字檔讀知識庫，整塊原樣使用
#[derive(Debug, Clone)]
pub struct FileKnowledge {
    path: PathBuf,
}

impl FileKnowledge {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl KnowledgeSource for FileKnowledge {
    fn load(&self) -> Result<String> {
        let text = std::fs::read_to_string(&self.path)?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_reads_file_verbatim() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("Возвраты: 14 дней.\nШтрафы: акт + претензия.".as_bytes())
            .unwrap();

        let knowledge = FileKnowledge::new(file.path());
        let text = knowledge.load().unwrap();

        assert_eq!(text, "Возвраты: 14 дней.\nШтрафы: акт + претензия.");
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let knowledge = FileKnowledge::new("/nonexistent/knowledge.txt");
        assert!(knowledge.load().is_err());
    }
}
