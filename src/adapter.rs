//! Function adapters: pipe a text-producing function through `translit`.
use crate::{
    lang::Direction,
    translit::{TranslitError, Transliterator},
};

impl Transliterator {
    /// Wraps `f` so its output is transliterated with `language_code`.
    ///
    /// ```
    /// use transliterate::{Direction, Transliterator};
    ///
    /// let t = Transliterator::new();
    /// let greet = t.wrap(|name: &str| format!("Privet, {name}"), "ru", Direction::Forward);
    /// assert_eq!(greet("Anna").unwrap(), "Привет, Анна");
    /// ```
    pub fn wrap<'t, A, S, F>(
        &'t self,
        f: F,
        language_code: &'t str,
        direction: Direction,
    ) -> impl Fn(A) -> Result<String, TranslitError> + 't
    where
        F: Fn(A) -> S + 't,
        S: AsRef<str>,
    {
        move |arg| {
            let text = f(arg);
            Ok(self
                .translit(text.as_ref(), language_code, direction)?
                .into_owned())
        }
    }
}

/// Same as [`Transliterator::wrap`], against the process-wide default
/// instance. The pack is looked up on every call, so packs registered later
/// are picked up.
pub fn transliterate_function<A, S, F>(
    f: F,
    language_code: impl Into<String>,
    reversed: bool,
) -> impl Fn(A) -> Result<String, TranslitError>
where
    F: Fn(A) -> S,
    S: AsRef<str>,
{
    let language_code = language_code.into();
    move |arg| crate::translit(f(arg).as_ref(), &language_code, reversed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_forward_and_reverse() {
        let t = Transliterator::new();
        let to_armenian = t.wrap(|s: &str| s.to_owned(), "hy", Direction::Forward);
        assert_eq!(
            to_armenian("Lorem ipsum dolor sit amet").unwrap(),
            "Լօրեմ իպսում դօլօր սիտ ամետ"
        );

        let from_armenian = t.wrap(|s: &str| s.to_owned(), "hy", Direction::Reverse);
        assert_eq!(
            from_armenian("Լօրեմ իպսում դoլoր սիտ ամետ").unwrap(),
            "Lorem ipsum dolor sit amet"
        );
    }

    #[test]
    fn test_wrap_unknown_language() {
        let t = Transliterator::new();
        let wrapped = t.wrap(|n: usize| "a".repeat(n), "xx", Direction::Forward);
        assert!(wrapped(2).is_err());
    }

    #[test]
    fn test_transliterate_function_uses_default_instance() {
        let to_russian = transliterate_function(|s: &str| s.to_owned(), "ru", false);
        assert_eq!(
            to_russian("Lorem ipsum dolor sit amet").unwrap(),
            "Лорем ипсум долор сит амет"
        );
    }
}
