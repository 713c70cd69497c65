//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use linguee_api::{autocompletions_url, search_url, LanguageCode};

    #[test]
    fn pinned_direction() {
        assert_eq!(
            search_url("bacalhau", LanguageCode::PT, LanguageCode::EN, false),
            "https://www.linguee.com/portuguese-english/search?query=bacalhau&ajax=1&source=PT"
        );
    }

    #[test]
    fn guessed_direction() {
        assert_eq!(
            search_url("bacalhau", LanguageCode::PT, LanguageCode::EN, true),
            "https://www.linguee.com/portuguese-english/search?query=bacalhau&ajax=1"
        );
    }

    #[test]
    fn same_arguments_same_url() {
        let first = search_url("Straße", LanguageCode::DE, LanguageCode::EN, false);
        let second = search_url("Straße", LanguageCode::DE, LanguageCode::EN, false);

        assert_eq!(first, second);
        assert!(first.starts_with("https://www.linguee.com/german-english/search?query=Stra%C3%9Fe&"));
    }

    #[test]
    fn autocompletion_prefix() {
        assert_eq!(
            autocompletions_url("katz", LanguageCode::DE, LanguageCode::EN),
            "https://www.linguee.com/german-english/search?qe=katz&source=auto"
        );
    }
}
