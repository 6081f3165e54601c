use aggtree::{
    AggregationTree,
    aggregator::{min_max::I64MinAggregator, sum::U64SumAggregator},
};

fn main() -> Result<(), aggtree::Error> {
    // RUST_LOG=debug shows the records emitted by aggtree
    env_logger::init();

    // Range sums over five elements
    let mut tree = AggregationTree::new(&[1u64, 2, 3, 4, 5], U64SumAggregator);
    assert_eq!(tree.query(0, 4), Ok(15));
    assert_eq!(tree.query(1, 3), Ok(9));

    // Replace the element at index 2 and query again
    tree.set(2, 10)?;
    assert_eq!(tree.query(1, 3), Ok(16));
    assert_eq!(tree.query_range(..), Ok(22));
    println!("sums after update: {tree:?}");

    // Range minimum over daily temperatures
    let temperatures = [3i64, -2, 5, -7, 1, 0, 4];
    let coldest = AggregationTree::new(&temperatures, I64MinAggregator);
    println!("coldest of first three days: {:?}", coldest.query(0, 2));
    println!("coldest of the week: {:?}", coldest.total());

    // Closures work as well. Combining keeps sequence order, so concatenation is fine.
    let words = ["range", " ", "queries", " ", "in", " ", "order"];
    let sentence = AggregationTree::from_fns(
        &words,
        |w: &&str| w.to_string(),
        |a: &String, b: &String| format!("{a}{b}"),
    );
    println!("{:?}", sentence.query(2, 6));

    // Invalid ranges are reported instead of panicking
    if let Err(err) = tree.query(3, 9) {
        log::warn!("query failed: {err}");
        println!("query failed: {err}");
    }
    Ok(())
}
