//! 同梱サンプル - ローカル実行用の入力ファイル
//!
//! 中身はダミーです。パイプラインが見るのはファイル名だけ。

use crate::domain::Payload;

use super::PipelineDriver;

pub const SAMPLE_FASTQ: &str = "@SEQ_ID\nGATTTGGGGTTTAAAGGG...\n+\n!''*((((***+))%%%++)(%%%%).1***-+*''))**55CCF>>>>>>CCCCCCC65";

pub const SAMPLE_BAM: &[u8] = b"BAM_BINARY_DATA";

pub const SAMPLE_VCF: &str = "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n1\t123456\trs1\tA\tG\t50\tPASS\t.";

/// 同梱サンプル 3 件の `(key, payload)`（処理順）
pub fn sample_files() -> Vec<(&'static str, Payload)> {
    vec![
        ("sample.fastq", Payload::from(SAMPLE_FASTQ)),
        ("sample.bam", Payload::from(SAMPLE_BAM)),
        ("sample.vcf", Payload::from(SAMPLE_VCF)),
    ]
}

/// 同梱サンプルのうち config の `files` に含まれるものだけをバケットに置く
///
/// 置いた件数を返します。`files` にないサンプルは置きません。
pub async fn stage_samples(driver: &PipelineDriver) -> usize {
    let wanted = &driver.config().files;
    let mut staged = 0;
    for (key, payload) in sample_files() {
        if wanted.iter().any(|file| file == key) {
            driver.stage(key, payload).await;
            staged += 1;
        }
    }
    staged
}
