// In demos/resolve.rs
//
// Encodes an object descriptor, hands the raw MQOD to a stand-in for the
// native MQOPEN, and decodes the resolved names back.
//
// RUST_LOG=mqod=trace cargo run --example resolve -- MY.QUEUE
use mqod::Core::strings::{set_fixed_string, OverlengthPolicy};
use mqod::Core::MarshalError;
use mqod::MQOD::Structs::{Field, ObjectDescriptor, ObjectType};
use mqod::MQOD::Wire::MQOD;
use mqod::MQOD::Marshaller;
use std::env;
use tracing_subscriber::EnvFilter;

// Resolves every queue name to itself on queue manager QM1.
fn fake_mqopen(od: &mut MQOD) -> Result<i32, MarshalError> {
    let name = od.object_name;
    od.resolved_q_name = name;
    set_fixed_string(
        &mut od.resolved_q_mgr_name,
        Field::ResolvedQMgrName,
        "QM1",
        OverlengthPolicy::Reject,
    )?;
    od.resolved_type = ObjectType::Queue.into();
    Ok(0)
}

fn main() -> Result<(), MarshalError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let queue = args.get(1).map(String::as_str).unwrap_or("MY.QUEUE");

    let marshaller = Marshaller::builder()
        .with_overlength_policy(OverlengthPolicy::Reject)
        .build();

    let mut desc = ObjectDescriptor::new().with_object_name(queue);

    let wire = marshaller.encode(&desc)?;
    println!("Encoded {} bytes:", wire.to_bytes().len());
    for (i, chunk) in wire.to_bytes().chunks(16).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
        println!("  {:04x}: {}", i * 16, hex.join(" "));
    }
    println!("{wire:#?}");
    drop(wire);

    let reason = marshaller.with_wire_record(&mut desc, fake_mqopen)?;
    println!("Native call returned reason {reason}");
    println!(
        "Resolved: {} on {} ({:?})",
        desc.resolved_q_name, desc.resolved_q_mgr_name, desc.resolved_type
    );

    Ok(())
}
