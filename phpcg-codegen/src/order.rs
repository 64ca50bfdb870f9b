//! Member ordering strategies.
//!
//! A [`Comparator`] decides the order in which the [`Navigator`] hands
//! members to a visitor. Any `Fn(&T, &T) -> Ordering` closure is a
//! comparator, and the named unit structs below are the defaults.
//!
//! [`Navigator`]: crate::Navigator

use std::cmp::Ordering;

use phpcg_ir::{Member, Visibility};

/// Total order over values of `T`, used to sort one phase of a class.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// ASCII case-insensitive comparison.
///
/// Non-ASCII bytes compare by value. Names differing only in case compare
/// equal, see [`compare_names`] for a total order.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Case-insensitive order, with an exact byte comparison between names that
/// differ only in case (`A` before `a`).
pub fn compare_names(a: &str, b: &str) -> Ordering {
    compare_ignore_case(a, b).then_with(|| a.cmp(b))
}

/// Rank used to group members by visibility: public 3, protected 2, private 1.
pub fn member_sorting_score(member: &impl Member) -> u8 {
    match member.visibility() {
        Visibility::Public => 3,
        Visibility::Protected => 2,
        Visibility::Private => 1,
    }
}

/// Higher visibility first, then name descending, see [`compare_names`].
pub fn default_property_order<M: Member>(a: &M, b: &M) -> Ordering {
    member_sorting_score(b)
        .cmp(&member_sorting_score(a))
        .then_with(|| compare_names(b.name(), a.name()))
}

/// Instance members before static ones, then [`default_property_order`].
pub fn default_method_order<M: Member>(a: &M, b: &M) -> Ordering {
    a.is_static()
        .cmp(&b.is_static())
        .then_with(|| default_property_order(a, b))
}

/// Default constant order: names ascending, ignoring ASCII case, with
/// [`compare_names`] settling case-only differences.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitiveName;

impl Comparator<str> for CaseInsensitiveName {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        compare_names(a, b)
    }
}

/// Default property order, see [`default_property_order`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPropertyOrder;

impl<M: Member> Comparator<M> for DefaultPropertyOrder {
    fn compare(&self, a: &M, b: &M) -> Ordering {
        default_property_order(a, b)
    }
}

/// Default method order, see [`default_method_order`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMethodOrder;

impl<M: Member> Comparator<M> for DefaultMethodOrder {
    fn compare(&self, a: &M, b: &M) -> Ordering {
        default_method_order(a, b)
    }
}
