use std::cmp::Ordering;

/// In-place quicksort with a Lomuto partition around the last element.
///
/// The smaller side of each partition is sorted recursively and the larger
/// side is looped on, so stack depth stays logarithmic even for sorted input.
pub(crate) fn quicksort<T, F>(items: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut start = 0;
    let mut end = items.len();

    while end - start > 1 {
        let wall = start + partition(&mut items[start..end], compare);

        if wall - start < end - wall - 1 {
            quicksort(&mut items[start..wall], compare);
            start = wall + 1;
        } else {
            quicksort(&mut items[wall + 1..end], compare);
            end = wall;
        }
    }
}

/// Moves every element not greater than the pivot left of the wall, then
/// swaps the pivot onto the wall. Returns the pivot's final index.
///
/// `items` must not be empty.
fn partition<T, F>(items: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let pivot = items.len() - 1;
    let mut wall = 0;

    for i in 0..pivot {
        if compare(&items[i], &items[pivot]) != Ordering::Greater {
            items.swap(i, wall);
            wall += 1;
        }
    }

    items.swap(wall, pivot);
    wall
}
