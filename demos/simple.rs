/// Run this example with cargo run --example simple
use ordered_skipmap::{Error, OrdComparator, Options, SkipMap};

fn main() {
    let mut sk: SkipMap<_, _> = (0..3).map(|i| (i, i.to_string())).collect();

    // print the levels of the skipmap
    // warning: this can print a lot of nodes (~ 2 * sk.len())
    print!("{}", sk.dump_string());

    // Test association
    if sk.contains_key(&0) {
        println!("It contains 0!");
    }
    if !sk.contains_key(&99) {
        println!("It doesn't contain 99 :C");
    }
    // Insert, update and remove entries
    if sk.set(99, "ninety-nine".into()).is_none() {
        println!("... it now contains 99 🎉");
    }
    if let Some(old) = sk.set(99, "99".into()) {
        println!("... replaced {:?}", old);
    }
    if let Ok(v) = sk.remove(&99) {
        println!("... I removed 99 (it was {:?})", v);
    }
    if let Err(Error::KeyNotFound) = sk.remove(&99) {
        println!("... can't remove 99 twice :c");
    }

    // We can check how many entries are in the skipmap
    dbg!(sk.len(), sk.is_empty(), sk.height());

    // Let's make a big skipmap with a sparser level distribution
    let options = Options::default().with_probability(0.25).with_seed(1);
    let mut big = SkipMap::with_options(OrdComparator, options).expect("valid options");
    big.extend((0..1000).map(|i| (i, i * 2)));

    // Lets iterate over all of them
    let all_eles: Vec<_> = big.iter().collect();
    dbg!((all_eles.len(), big.len(), big.height()));

    // Order follows the comparator, so a reversed one walks backwards
    let mut rev = SkipMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    rev.extend(vec![(1, 'a'), (3, 'c'), (2, 'b')]);
    rev.for_each(|k, v| println!("{} => {}", k, v));
}
