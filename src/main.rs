use ordered_skipmap::SkipMap;
use std::io;

fn main() -> io::Result<()> {
    // Make a new skipmap
    let mut sk = SkipMap::new();
    for i in 0..8u32 {
        // Inserts are O(log(n)) on average
        sk.set(i, i * i);
    }
    // You can print every level of the skipmap!
    sk.dump(io::stdout())?;
    // Lookups are O(log(n)) too
    assert_eq!(sk.get(&3), Ok(&9));
    assert!(!sk.contains_key(&10));
    Ok(())
}
