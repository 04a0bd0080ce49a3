use hex_converter::core::{buffer_to_hex, hex_to_buffer, xor_encrypt_decrypt};
use hex_converter::{ConversionMode, Converter};
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_codec_calls_are_independent() {
    use tokio::task::JoinSet;

    let iterations = 10_000usize;
    let payload_sizes = [0usize, 1, 64, 512, 4096];

    let mut tasks = JoinSet::new();
    for &size in &payload_sizes {
        tasks.spawn(async move {
            for i in 0..iterations {
                let payload = vec![((i + size) & 0xFF) as u8; size];
                let hex = buffer_to_hex(&payload);
                assert_eq!(hex_to_buffer(&hex).unwrap(), payload);

                if size > 0 {
                    let masked = xor_encrypt_decrypt(&hex, "0x5a").unwrap();
                    assert_eq!(xor_encrypt_decrypt(&masked, "0x5a").unwrap(), hex);
                }
            }
        });
    }

    while let Some(res) = tasks.join_next().await {
        res.unwrap();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_converter_counts_every_call() {
    use tokio::task::JoinSet;

    let converter = Arc::new(Converter::default());
    let workers = 8u64;
    let per_worker = 500u64;

    let mut tasks = JoinSet::new();
    for w in 0..workers {
        let converter = converter.clone();
        tasks.spawn(async move {
            for i in 0..per_worker {
                let n = w * per_worker + i;
                let hex = converter
                    .convert_mode(ConversionMode::NumberToHex, &n.to_string())
                    .unwrap();
                let back = converter
                    .convert_mode(ConversionMode::HexToNumber, &hex)
                    .unwrap();
                assert_eq!(back, n.to_string());
            }
        });
    }

    while let Some(res) = tasks.join_next().await {
        res.unwrap();
    }

    let snap = converter.metrics();
    assert_eq!(snap.conversions_total, workers * per_worker * 2);
    assert_eq!(snap.conversions_success, workers * per_worker * 2);
    assert_eq!(snap.conversions_failed, 0);
}
