//! Command-line handling: library root and startup deep link.

use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupOptions {
    /// Directory that contains `gallery/`
    pub root: Option<PathBuf>,
    /// Location fragment such as `#/gallery/trip/a.jpg`
    pub fragment: Option<String>,
}

impl StartupOptions {
    /// Reads positional arguments in any order. An argument containing `#`
    /// is a location (only the fragment part is kept); the first other
    /// non-flag argument is the root. After `--` every argument is taken as
    /// a root candidate, so roots containing `#` or starting with `-` can
    /// still be given.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut options = Self::default();
        let mut positional_only = false;
        for arg in args {
            if positional_only {
                options.root.get_or_insert_with(|| PathBuf::from(arg));
                continue;
            }
            let text = arg.to_string_lossy().into_owned();
            if text == "--" {
                positional_only = true;
            } else if let Some(start) = text.find('#') {
                if options.fragment.is_none() {
                    options.fragment = Some(text[start..].to_string());
                }
            } else if text.starts_with('-') {
                continue;
            } else if options.root.is_none() {
                options.root = Some(PathBuf::from(arg));
            }
        }
        options
    }

    /// Fragment to seed the history with, `"/"` when there is none.
    pub fn initial_url(&self) -> String {
        match &self.fragment {
            Some(fragment) => format!("/{}", fragment),
            None => "/".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> StartupOptions {
        StartupOptions::from_args(args.iter().map(OsString::from))
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(parse(&[]), StartupOptions::default());
        assert_eq!(parse(&[]).initial_url(), "/");
    }

    #[test]
    fn test_root_and_fragment_in_any_order() {
        let expected = StartupOptions {
            root: Some(PathBuf::from("/srv/photos")),
            fragment: Some("#/gallery/trip".into()),
        };
        assert_eq!(parse(&["/srv/photos", "#/gallery/trip"]), expected);
        assert_eq!(parse(&["#/gallery/trip", "/srv/photos"]), expected);
    }

    #[test]
    fn test_full_location_keeps_fragment() {
        let options = parse(&["/#/gallery/trip/a.jpg"]);
        assert_eq!(options.fragment.as_deref(), Some("#/gallery/trip/a.jpg"));
        assert_eq!(options.root, None);
        assert_eq!(options.initial_url(), "/#/gallery/trip/a.jpg");
    }

    #[test]
    fn test_flags_are_ignored() {
        let options = parse(&["--verbose", "photos"]);
        assert_eq!(options.root, Some(PathBuf::from("photos")));
    }

    #[test]
    fn test_double_dash_ends_flags() {
        let options = parse(&["#/gallery/trip", "--", "-photos#2024", "later"]);
        assert_eq!(options.root, Some(PathBuf::from("-photos#2024")));
        assert_eq!(options.fragment.as_deref(), Some("#/gallery/trip"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_root_is_kept_verbatim() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"/srv/ph\xffotos".to_vec());
        let options = StartupOptions::from_args([raw.clone(), OsString::from("#/gallery/trip")]);
        assert_eq!(options.root, Some(PathBuf::from(raw)));
        assert_eq!(options.fragment.as_deref(), Some("#/gallery/trip"));
    }
}
