// Allocation tracking tests for wire records
//
// Note: dhat only allows one testing profiler per process, so every heap
// assertion lives in the single test below.
//
// cargo test --test allocation_tracking -- --nocapture

use mqod::Core::MarshalError;
use mqod::MQOD::Structs::ObjectDescriptor;
use mqod::MQOD::{encode, with_wire_record};

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[test]
fn test_wire_record_released_after_call() {
    let _dhat = dhat::Profiler::builder().testing().build();

    // Warm up one-time lazy state (logging callsites) outside the window.
    drop(encode(&ObjectDescriptor::default()).unwrap());

    let before = dhat::HeapStats::get();
    {
        let mut desc = ObjectDescriptor::new()
            .with_object_name("MY.QUEUE")
            .with_object_string("price/fruit")
            .with_selection_string("colour = 'red'");

        for _ in 0..100 {
            with_wire_record(&mut desc, |od| {
                od.resolved_q_name[..8].copy_from_slice(b"MY.QUEUE");
                Ok::<_, MarshalError>(())
            })
            .unwrap();
        }
        assert_eq!(desc.resolved_q_name, "MY.QUEUE");
    }
    {
        let mut desc = ObjectDescriptor::new().with_selection_string("x > 1");
        let res: Result<(), MarshalError> = with_wire_record(&mut desc, |_| {
            Err(MarshalError::InvalidLength {
                field: mqod::MQOD::Structs::Field::ObjectString,
                declared: 1,
                actual: 0,
            })
        });
        assert!(res.is_err());

        // Encode-only path: the record is dropped at the end of scope.
        let wire = encode(&desc).unwrap();
        assert!(!wire.raw().selection_string.vs_ptr.is_null());
    }
    let after = dhat::HeapStats::get();

    println!("blocks before: {}, after: {}", before.curr_blocks, after.curr_blocks);
    println!("total blocks allocated during test: {}", after.total_blocks - before.total_blocks);
    dhat::assert_eq!(after.curr_blocks, before.curr_blocks);
    dhat::assert_eq!(after.curr_bytes, before.curr_bytes);
}
