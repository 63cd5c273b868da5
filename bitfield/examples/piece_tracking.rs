use bitfield::{Bitfield, BitfieldError};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), BitfieldError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    println!("=== Bitfield Examples ===\n");

    example_download_progress()?;
    example_peer_message()?;
    example_memory_savings();

    Ok(())
}

fn example_download_progress() -> Result<(), BitfieldError> {
    println!("Example 1: Tracking downloaded pieces");

    let pieces = 20;
    let mut have = Bitfield::new(pieces);

    for piece in [0, 7, 8, 19] {
        have.set(piece)?;
        info!(piece, "piece verified");
    }

    println!("  Have {}/{} pieces", have.count(), have.len());
    println!("  Bitfield: {}", have.to_hex());
    if let Some(next) = have.first_clear(0) {
        println!("  Next piece to request: {}", next);
    }
    println!("  Complete: {}", have.all());
    println!();

    Ok(())
}

fn example_peer_message() -> Result<(), BitfieldError> {
    println!("Example 2: Wrapping a peer's bitfield message");

    // 11 pieces, but the peer sent junk in the padding bits.
    let mut payload = [0b1011_0000u8, 0b1111_1111];
    let theirs = Bitfield::from_bytes(&mut payload[..], 11)?;

    let mut ours = Bitfield::new(11);
    ours.set(0)?;

    let wanted: Vec<usize> = theirs
        .ones()
        .filter(|&i| !ours.test(i).unwrap_or(true))
        .collect();

    println!("  Peer has: {}", theirs.to_hex());
    println!("  Pieces we can fetch from them: {:?}", wanted);
    println!();

    Ok(())
}

fn example_memory_savings() {
    println!("Example 3: Memory savings comparison");

    let count = 10_000;

    // Vec<bool>
    let standard_bytes = count;

    let packed = Bitfield::new(count);
    let packed_bytes = packed.as_bytes().len();

    let savings = 100.0 * (1.0 - (packed_bytes as f64 / standard_bytes as f64));

    println!("  Tracking {} pieces:", count);
    println!("  Vec<bool>: {} bytes", standard_bytes);
    println!("  Packed:    {} bytes", packed_bytes);
    println!("  Savings:   {:.1}%", savings);
}
