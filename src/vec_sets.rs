// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// All functions here assume their inputs are sorted and free of duplicates.

pub fn union<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Ord + Copy,
{
    let mut c: Vec<T> = Vec::with_capacity(a.len() + b.len());
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        if a[ap] < b[bp] {
            c.push(a[ap]);
            ap += 1;
        } else if b[bp] < a[ap] {
            c.push(b[bp]);
            bp += 1;
        } else {
            c.push(a[ap]);
            ap += 1;
            bp += 1;
        }
    }
    c.extend_from_slice(&a[ap..]);
    c.extend_from_slice(&b[bp..]);
    c
}

// Size of the union, without allocating it.
pub fn union_len<T>(a: &[T], b: &[T]) -> usize
where
    T: Ord,
{
    let mut count = 0;
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        if a[ap] < b[bp] {
            ap += 1;
        } else if b[bp] < a[ap] {
            bp += 1;
        } else {
            ap += 1;
            bp += 1;
        }
        count += 1;
    }
    count + (a.len() - ap) + (b.len() - bp)
}

// Items in a that aren't in b.
pub fn difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Ord + Copy,
{
    let mut c: Vec<T> = Vec::with_capacity(a.len());
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        if a[ap] < b[bp] {
            c.push(a[ap]);
            ap += 1;
        } else if b[bp] < a[ap] {
            bp += 1;
        } else {
            ap += 1;
            bp += 1;
        }
    }
    c.extend_from_slice(&a[ap..]);
    c
}

// True if every element of a is in b.
pub fn is_subset<T>(a: &[T], b: &[T]) -> bool
where
    T: Ord,
{
    if a.len() > b.len() {
        return false;
    }
    let mut bp = 0;
    for x in a {
        while bp < b.len() && b[bp] < *x {
            bp += 1;
        }
        if bp == b.len() || b[bp] != *x {
            return false;
        }
        bp += 1;
    }
    true
}

pub fn is_disjoint<T>(a: &[T], b: &[T]) -> bool
where
    T: Ord,
{
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        if a[ap] < b[bp] {
            ap += 1;
        } else if b[bp] < a[ap] {
            bp += 1;
        } else {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::item::Item;
    fn to_item_vec(nums: &[u32]) -> Vec<Item> {
        nums.iter().map(|i| Item::with_id(*i)).collect()
    }

    #[test]
    fn test_union() {
        use super::{union, union_len};

        let test_cases: Vec<(Vec<Item>, Vec<Item>, Vec<Item>)> = [
            (vec![1, 2, 3], vec![4, 5, 6], vec![1, 2, 3, 4, 5, 6]),
            (vec![1, 2, 3], vec![3, 4, 5, 6], vec![1, 2, 3, 4, 5, 6]),
            (vec![0, 2], vec![1, 2], vec![0, 1, 2]),
            (vec![], vec![1], vec![1]),
            (vec![1], vec![], vec![1]),
        ]
        .iter()
        .map(|(a, b, u)| (to_item_vec(a), to_item_vec(b), to_item_vec(u)))
        .collect();

        for (a, b, c) in &test_cases {
            assert_eq!(&union(a, b), c);
            assert_eq!(union_len(a, b), c.len());
        }
    }

    #[test]
    fn test_difference() {
        use super::difference;
        let cases = [
            (vec![1, 2, 3], vec![2], vec![1, 3]),
            (vec![1, 2, 3], vec![1, 2, 3], vec![]),
            (vec![1, 2, 3], vec![], vec![1, 2, 3]),
            (vec![1, 3], vec![0, 2, 4], vec![1, 3]),
        ];
        for (a, b, c) in cases.iter() {
            assert_eq!(
                difference(&to_item_vec(a), &to_item_vec(b)),
                to_item_vec(c)
            );
        }
    }

    #[test]
    fn test_is_subset() {
        use super::is_subset;
        let cases = [
            (vec![], vec![1], true),
            (vec![1], vec![1], true),
            (vec![1, 3], vec![1, 2, 3], true),
            (vec![1, 4], vec![1, 2, 3], false),
            (vec![0], vec![1, 2, 3], false),
            (vec![1, 2, 3], vec![1, 2], false),
        ];
        for (a, b, expected) in cases.iter() {
            assert_eq!(is_subset(&to_item_vec(a), &to_item_vec(b)), *expected);
        }
    }

    #[test]
    fn test_is_disjoint() {
        use super::is_disjoint;
        assert!(is_disjoint(&to_item_vec(&[1, 3]), &to_item_vec(&[0, 2, 4])));
        assert!(!is_disjoint(&to_item_vec(&[1, 3]), &to_item_vec(&[3])));
        assert!(is_disjoint(&to_item_vec(&[]), &to_item_vec(&[3])));
    }
}
