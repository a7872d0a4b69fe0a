//! Supported genomics file formats.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Genomics file format recognised by the validation step.
///
/// Serialized as `FASTQ` / `BAM` / `VCF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    Fastq,
    Bam,
    Vcf,
}

impl FileType {
    /// Suffix precedence used by classification: the first match wins.
    pub const PRECEDENCE: [FileType; 3] = [FileType::Vcf, FileType::Bam, FileType::Fastq];

    /// Literal filename suffix (case-sensitive, including the dot).
    pub fn suffix(self) -> &'static str {
        match self {
            FileType::Fastq => ".fastq",
            FileType::Bam => ".bam",
            FileType::Vcf => ".vcf",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FileType::Fastq => "FASTQ",
            FileType::Bam => "BAM",
            FileType::Vcf => "VCF",
        }
    }

    /// Classify a filename by its suffix.
    pub fn from_filename(file: &str) -> Option<Self> {
        Self::PRECEDENCE
            .into_iter()
            .find(|ty| file.ends_with(ty.suffix()))
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(FileType::from_filename("SAMPLE.VCF"), None);
        assert_eq!(FileType::from_filename("sample.vcf"), Some(FileType::Vcf));
    }

    #[test]
    fn serializes_upper_case() {
        let json = serde_json::to_string(&FileType::Fastq).unwrap();
        assert_eq!(json, "\"FASTQ\"");
    }

    #[test]
    fn multi_suffix_names_use_trailing_suffix() {
        assert_eq!(FileType::from_filename("x.bam.vcf"), Some(FileType::Vcf));
        assert_eq!(FileType::from_filename("x.vcf.bam"), Some(FileType::Bam));
    }
}
