use std::{
    fs::{self, File},
    io::{BufWriter, Seek, SeekFrom, Write},
};

use sdriq_core::{
    read_header, reconcile, write_header, HeaderCodec, HeaderRecord, HeaderReport,
    IntegrityGuard, SdriqError, StreamTranscoder, TimestampUnit, CHUNK_BLOCK_SIZE, HEADER_SIZE,
};
use tempfile::NamedTempFile;

// ===========================================================================
// Helpers — детерминированные тест-данные
// ===========================================================================

/// Заголовок старого формата: время в секундах, CRC корректен.
fn legacy_header() -> HeaderRecord {
    HeaderRecord::new(75_000, 435_000_000, 1_539_083_921, 16).recompute()
}

/// Пилообразные Int16 IQ пары.
fn deterministic_payload(pairs: usize) -> Vec<u8> {
    (0..pairs)
        .flat_map(|i| {
            let i_val = ((i % 128) as i16) * 256;
            let q_val = -((i % 128) as i16) * 256;
            let mut bytes = [0u8; 4];
            bytes[0..2].copy_from_slice(&i_val.to_le_bytes());
            bytes[2..4].copy_from_slice(&q_val.to_le_bytes());
            bytes
        })
        .collect()
}

fn build_capture(
    header: &HeaderRecord,
    payload: &[u8],
) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(&header.encode()).unwrap();
    tmp.write_all(payload).unwrap();
    tmp.flush().unwrap();
    tmp
}

// ===========================================================================
// Тесты
// ===========================================================================

#[test]
fn test_reference_vector_on_disk() {
    let tmp = build_capture(&legacy_header(), &[]);
    let bytes = fs::read(tmp.path()).unwrap();

    assert_eq!(bytes.len(), HEADER_SIZE);
    assert_eq!(&bytes[28..32], &2_294_957_931u32.to_le_bytes());
}

#[test]
fn test_rewrite_pipeline_file_to_file() {
    let payload = deterministic_payload(3 * CHUNK_BLOCK_SIZE / 4 + 17);
    let src = build_capture(&legacy_header(), &payload);
    let dst = NamedTempFile::new().unwrap();

    {
        let mut input = File::open(src.path()).unwrap();
        let header = read_header(&mut input).unwrap();
        assert!(header.verify());

        let mut header = reconcile(&header, TimestampUnit::Seconds);
        header.center_frequency = 145_800_000;
        header.recompute_in_place();

        let mut output = BufWriter::new(File::create(dst.path()).unwrap());
        write_header(&mut output, &header).unwrap();

        let report = StreamTranscoder::with_blocks(1)
            .unwrap()
            .copy(&mut input, &mut output)
            .unwrap();
        assert!(report.is_complete());
        assert_eq!(report.bytes_copied, payload.len() as u64);

        output.flush().unwrap();
    }

    let out = fs::read(dst.path()).unwrap();
    assert_eq!(out.len(), HEADER_SIZE + payload.len());
    assert_eq!(&out[HEADER_SIZE..], &payload[..], "payload must be byte-exact");

    let header = HeaderRecord::decode(&out).unwrap();
    assert!(header.verify());
    assert_eq!(header.center_frequency, 145_800_000);
    assert_eq!(header.start_timestamp, 1_539_083_921_000);
    assert_eq!(header.sample_rate, 75_000);
}

#[test]
fn test_truncated_file_rejected() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(&legacy_header().encode()[..HEADER_SIZE - 1])
        .unwrap();
    tmp.flush().unwrap();

    let mut input = File::open(tmp.path()).unwrap();
    let result = read_header(&mut input);

    assert!(matches!(
        result,
        Err(SdriqError::HeaderTruncated { found }) if found == HEADER_SIZE - 1
    ));
}

#[test]
fn test_corrupted_crc_still_decodes() {
    let mut bytes = legacy_header().encode();
    bytes[0] ^= 0x01; // sample_rate = 75_001

    let tmp = NamedTempFile::new().unwrap();
    fs::write(tmp.path(), bytes).unwrap();

    let header = read_header(&mut File::open(tmp.path()).unwrap()).unwrap();
    assert_eq!(header.sample_rate, 75_001);
    assert!(!header.verify(), "несовпадение CRC только сообщается");
}

#[test]
fn test_report_payload_length_from_file() {
    let payload = deterministic_payload(75_000 * 2); // 2 секунды при 75 kS/s
    let tmp = build_capture(&legacy_header(), &payload);

    let mut input = File::open(tmp.path()).unwrap();
    let header = read_header(&mut input).unwrap();
    let total = input.seek(SeekFrom::End(0)).unwrap();

    let report = HeaderReport::new(&header).with_payload_len(total - HEADER_SIZE as u64);
    assert_eq!(report.record_length_secs(), Some(2.0));
    assert!(report.checksum_ok);
}
