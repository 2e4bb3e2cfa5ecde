//! Build a decoded-payload tree by hand and walk it the way an encoder would.
//!
//! Run with: cargo run -p wireval --example payload_tree

use wireval::{Kind, Value, ValueError};

fn main() -> Result<(), ValueError> {
    // What a datagram decoder would produce for something like:
    // { "seq": 17, "ok": true, "addrs": ["10.0.0.1", "10.0.0.2"], "rtt": 0.031 }
    let mut root = Value::new_undefined();
    root.object_at("seq")?.set_uint(17)?;
    root.object_at("ok")?.set_bool(true)?;
    root.object_at("rtt")?.set_float(0.031)?;

    let addrs = root.object_at("addrs")?;
    addrs.array_at(0)?.set_string("10.0.0.1")?;
    addrs.array_at(1)?.set_string("10.0.0.2")?;

    // Carry a blob the decoder didn't understand, tagged with its wire type.
    root.object_at("raw")?
        .set_user_defined(0x2A, vec![0x01u8, 0x02, 0x03])?;

    walk(&root, 0);
    Ok(())
}

/// Dispatch on `kind()` and extract through the `as_*` accessors, the same
/// shape an encoder front-end takes.
fn walk(value: &Value, depth: usize) {
    let pad = "  ".repeat(depth);
    match value.kind() {
        Kind::Undefined => println!("{pad}(undefined)"),
        Kind::Int64 => println!("{pad}int64   {}", value.as_int().unwrap()),
        Kind::UInt64 => println!("{pad}uint64  {}", value.as_uint().unwrap()),
        Kind::Float64 => println!("{pad}float64 {}", value.as_float().unwrap()),
        Kind::String => println!("{pad}string  {:?}", value.as_str().unwrap()),
        Kind::Bool => println!("{pad}bool    {}", value.as_bool().unwrap()),
        Kind::Array => {
            println!("{pad}array");
            for child in value.as_array().unwrap() {
                walk(child, depth + 1);
            }
        }
        Kind::Object => {
            println!("{pad}object");
            for (key, child) in value.as_object().unwrap() {
                println!("{pad}  {key}:");
                walk(child, depth + 2);
            }
        }
        Kind::UserDefined => {
            let sub_type = value.user_sub_type().unwrap();
            let blob = value.user_payload_as::<Vec<u8>>();
            println!("{pad}user-defined #{sub_type} {blob:?}");
        }
    }
}
