//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use std::sync::Arc;

    use linguee_api::network::file::{file_name_to_url, url_to_file_name};
    use linguee_api::{ErrorFetcher, Fetcher, FileCache, MockFetcher};

    const URL: &str = "https://www.linguee.com/german-english/search?query=katze&ajax=1&source=DE";

    #[test]
    fn file_name_is_reversible() {
        let file_name = url_to_file_name(URL);

        assert_eq!(
            file_name,
            "https%3A%2F%2Fwww.linguee.com%2Fgerman-english%2Fsearch%3Fquery%3Dkatze%26ajax%3D1%26source%3DDE"
        );
        assert_eq!(file_name_to_url(&file_name), URL);
        assert!(!url_to_file_name("https://x.example/a b/ü").contains('/'));
    }

    #[tokio::test]
    async fn page_is_written_to_its_own_file() {
        let directory = tempfile::tempdir().unwrap();
        let upstream = Arc::new(MockFetcher::new("<html>katze</html>"));
        let cache = FileCache::in_directory(directory.path().join("pages"), upstream.clone());

        assert_eq!(cache.fetch(URL).await.unwrap(), "<html>katze</html>");

        let page_file = cache.store().page_file(URL);
        assert!(page_file.starts_with(directory.path().join("pages")));
        assert_eq!(std::fs::read_to_string(page_file).unwrap(), "<html>katze</html>");

        assert_eq!(cache.fetch(URL).await.unwrap(), "<html>katze</html>");
        assert_eq!(upstream.calls(), 1);
    }

    #[tokio::test]
    async fn pages_outlive_the_cache_instance() {
        let directory = tempfile::tempdir().unwrap();

        let cache = FileCache::in_directory(directory.path(), Arc::new(MockFetcher::new("foo")));
        cache.fetch(URL).await.unwrap();
        drop(cache);

        let cache = FileCache::in_directory(directory.path(), Arc::new(ErrorFetcher));
        assert_eq!(cache.fetch(URL).await.unwrap(), "foo");
    }

    #[tokio::test]
    async fn no_temporary_files_are_left_behind() {
        let directory = tempfile::tempdir().unwrap();
        let cache = FileCache::in_directory(directory.path(), Arc::new(MockFetcher::new("foo")));

        cache.fetch("https://a.example").await.unwrap();
        cache.fetch("https://b.example").await.unwrap();

        let names: Vec<String> = std::fs::read_dir(directory.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.iter().all(|name| !name.ends_with(".tmp")));
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use std::sync::Arc;

    use linguee_api::{ErrorFetcher, Fetcher, FileCache};

    #[tokio::test]
    async fn miss_with_failing_upstream_creates_nothing() {
        let directory = tempfile::tempdir().unwrap();
        let pages = directory.path().join("pages");
        let cache = FileCache::in_directory(&pages, Arc::new(ErrorFetcher));

        assert!(cache.fetch("https://a.example").await.is_err());
        assert!(!pages.exists());
    }
}
