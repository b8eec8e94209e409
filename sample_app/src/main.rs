use anyhow::{Result, ensure};
use dynamic_array_list::DynamicArrayList;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    println!("Initializing DynamicArrayList...");
    let mut list = DynamicArrayList::with_capacity(0);

    println!("Adding elements...");
    for i in [4, 8, 15, 16, 23, 42] {
        list.add(i);
        info!("size {} capacity {}", list.size(), list.capacity());
    }
    ensure!(list.size() == 6, "expected 6 elements, found {}", list.size());

    list.insert(0, 108)?;
    let removed = list.remove(3)?;
    println!("Removed {} from index 3", removed);

    list.sort_by(|a, b| b.cmp(a));
    println!("Descending: {:?}", list);
    ensure!(list.to_vec() == vec![108, 42, 23, 16, 8, 4]);

    list.sort();
    println!("Ascending: {:?}", list);
    ensure!(*list.get(0)? == 4);

    let capacity = list.capacity();
    list.clear();
    ensure!(list.is_empty() && list.capacity() == capacity);
    ensure!(list.get(0).is_err());

    println!("Sample run passed successfully.");
    Ok(())
}
