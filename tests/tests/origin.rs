//! Behavior of the process-wide origin address under shared access.

use std::sync::Arc;
use std::thread;

use samenet_core::network::addr;
use samenet_core::origin::{DEFAULT_ORIGIN, OriginHolder};

#[test]
fn default_origin_is_the_boot_literal() {
    assert_eq!(OriginHolder::new().get(), DEFAULT_ORIGIN);
    assert_eq!(DEFAULT_ORIGIN, "192.168.15.4");
}

#[test]
fn rejected_updates_keep_the_previous_value() {
    let holder = OriginHolder::new();
    holder.set("10.1.2.3").unwrap();

    assert!(holder.set("300.1.2.3").is_err());
    assert!(holder.set("1.2.3").is_err());
    assert!(holder.set("").is_err());
    assert_eq!(holder.get(), "10.1.2.3");
}

#[test]
fn readers_always_see_a_valid_address() {
    let holder = Arc::new(OriginHolder::new());

    let writer = {
        let holder = Arc::clone(&holder);
        thread::spawn(move || {
            for third in 0..50u8 {
                holder.set(&format!("10.0.{third}.1")).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let holder = Arc::clone(&holder);
            thread::spawn(move || {
                for _ in 0..200 {
                    let snapshot = holder.get();
                    assert!(addr::parse(&snapshot).is_ok(), "torn read: {snapshot}");
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(holder.get(), "10.0.49.1");
}

#[test]
fn randomized_origin_passes_the_codec() {
    let holder = OriginHolder::new();
    for _ in 0..50 {
        let generated = holder.randomize();
        assert_eq!(holder.get(), generated);
        assert!(addr::parse(&generated).is_ok(), "{generated}");
    }
}
