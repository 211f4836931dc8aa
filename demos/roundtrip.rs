//! Encoding integers through the host exports and back.
//!
//! Run with:
//!     RUST_LOG=bigbytes=trace cargo run --example roundtrip

use bigbytes::{Codec, CodecConfig, MemoryHost, Value, exports};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Small pool so rotation shows up in the logs
    let config = CodecConfig::new(64)?;
    let mut codec = Codec::new(config);
    let mut host = MemoryHost::new();

    let values = [
        Value::bigint(Vec::new()),
        Value::from(1u64),
        Value::from(0x0102_0304u64),
        Value::from(u128::MAX),
        Value::bigint(vec![0x5555_5555_5555_5555; 40]),
    ];

    println!("Pool: {} bytes\n", config.pool_bytes());

    for value in &values {
        for (encode, decode) in [("toBytesLE", "fromBytesLE"), ("toBytesBE", "fromBytesBE")] {
            let bytes = exports::dispatch(encode, &mut codec, &mut host, std::slice::from_ref(value))?;
            let back = exports::dispatch(decode, &mut codec, &mut host, std::slice::from_ref(&bytes))?;

            let preview: String = bytes
                .as_bytes()
                .map(|b| b.iter().take(8).map(|byte| format!("{:02x}", byte)).collect())
                .unwrap_or_default();

            println!(
                "{}: {} -> {} [{}{}] -> {}",
                encode,
                value,
                bytes,
                preview,
                if bytes.as_bytes().is_some_and(|b| b.len() > 8) { "..." } else { "" },
                if &back == value { "ok" } else { "MISMATCH" }
            );
        }
    }

    // Recoverable errors leave the codec usable
    match exports::dispatch("toBytesLE", &mut codec, &mut host, &[Value::Text("12".into())]) {
        Ok(_) => println!("\nunexpected success"),
        Err(err) => println!("\nRejected string argument: {} (fatal: {})", err, err.is_fatal()),
    }

    let stats = codec.allocator().stats();
    println!(
        "\nTotal: {} pooled, {} dedicated, {} rotations",
        stats.pooled, stats.dedicated, stats.rotations
    );

    Ok(())
}
