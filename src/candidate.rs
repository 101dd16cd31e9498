use std::borrow::Cow;

/// A value that may be checked as a CNPJ.
///
/// `None` stands for an absent value. Everything else is rendered to text
/// before validation, so numbers are accepted in their decimal form (leading
/// zeros are lost, just as they would be for any numeric identifier).
pub trait Candidate {
    fn to_candidate(&self) -> Option<Cow<'_, str>>;
}

impl Candidate for str {
    fn to_candidate(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl Candidate for String {
    fn to_candidate(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl Candidate for Cow<'_, str> {
    fn to_candidate(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_ref()))
    }
}

impl Candidate for char {
    fn to_candidate(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.to_string()))
    }
}

macro_rules! impl_candidate_for_integers {
    ($($int:ty),*) => {
        $(
            impl Candidate for $int {
                fn to_candidate(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

impl_candidate_for_integers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<T: Candidate> Candidate for Option<T> {
    fn to_candidate(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(|value| value.to_candidate())
    }
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn to_candidate(&self) -> Option<Cow<'_, str>> {
        (**self).to_candidate()
    }
}
