//! Validator trait - イベントを受けて ValidationResult を返す純粋関数

use crate::domain::{FileType, ValidationEvent, ValidationResult};

/// レジストリに名前で登録される検証ロジック
///
/// 実装は純粋関数であること（同じイベントなら同じ結果）。
pub trait Validator: Send + Sync {
    fn validate(&self, event: &ValidationEvent) -> ValidationResult;
}

impl<F> Validator for F
where
    F: Fn(&ValidationEvent) -> ValidationResult + Send + Sync,
{
    fn validate(&self, event: &ValidationEvent) -> ValidationResult {
        self(event)
    }
}

/// ファイル名の suffix（大文字小文字を区別）だけで分類する
///
/// `.vcf`, `.bam`, `.fastq` の順に調べ、最初に一致したものを採用します。
/// どれにも一致しなければ INVALID。ファイルの中身は見ません。
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixValidator;

impl Validator for SuffixValidator {
    fn validate(&self, event: &ValidationEvent) -> ValidationResult {
        match FileType::from_filename(&event.file) {
            Some(file_type) => ValidationResult::valid(event.file.clone(), file_type),
            None => ValidationResult::invalid(event.file.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationStatus;
    use rstest::rstest;

    #[rstest]
    #[case::vcf("sample.vcf", Some(FileType::Vcf))]
    #[case::bam("sample.bam", Some(FileType::Bam))]
    #[case::fastq("sample.fastq", Some(FileType::Fastq))]
    #[case::nested_path("runs/2024/tumor.fastq", Some(FileType::Fastq))]
    #[case::bare_suffix(".bam", Some(FileType::Bam))]
    #[case::text("notes.txt", None)]
    #[case::upper_case("SAMPLE.VCF", None)]
    #[case::compressed("sample.vcf.gz", None)]
    #[case::fq_alias("sample.fq", None)]
    #[case::no_dot("samplevcf", None)]
    #[case::empty("", None)]
    fn suffix_classification(#[case] file: &str, #[case] expected: Option<FileType>) {
        let result = SuffixValidator.validate(&ValidationEvent::new(file));

        assert_eq!(result.file, file);
        assert_eq!(result.file_type, expected);
        let expected_status = if expected.is_some() {
            ValidationStatus::Valid
        } else {
            ValidationStatus::Invalid
        };
        assert_eq!(result.status, expected_status);
    }

    #[test]
    fn closures_are_validators() {
        let reject_all = |event: &ValidationEvent| ValidationResult::invalid(event.file.clone());
        let result = reject_all.validate(&ValidationEvent::new("sample.vcf"));
        assert_eq!(result.status, ValidationStatus::Invalid);
    }
}
