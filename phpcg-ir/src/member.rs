use crate::Visibility;

/// The shape shared by properties and methods.
///
/// Sort strategies are written against this trait so the same ordering can
/// be applied to either kind of member.
pub trait Member {
    fn name(&self) -> &str;
    fn visibility(&self) -> Visibility;
    fn is_static(&self) -> bool;
    fn docblock(&self) -> Option<&str>;
}
