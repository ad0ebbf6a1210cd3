#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use proptest::prelude::*;
    use sentiment_dashboard::hooks::use_comments::{CommentsAction, DataState};
    use sentiment_dashboard::models::{
        aggregate::{self, Summary},
        comment::{Comment, RawComment},
        error::AppError,
        filter::Category,
        store::CommentStore,
    };
    use sentiment_dashboard::services::api::{CommentSource, parse_comments};
    use std::rc::Rc;
    use yew::Reducible;

    const SOURCES: [&str; 3] = ["twitter", "reddit", "youtube"];
    const TOPICS: [&str; 3] = ["sport", "politics", "economy"];
    const SENTIMENTS: [&str; 4] = ["POSITIVE", "NEGATIVE", "NEUTRAL", "MIXED"];

    // Helper function to create a test comment
    fn create_comment(day: u32, source: &str, topic: &str, sentiment: &str) -> Comment {
        Comment {
            date: Utc.with_ymd_and_hms(2024, 10, day, 8, 30, 0).unwrap(),
            source: source.to_string(),
            topic: topic.to_string(),
            sentiment: sentiment.parse().unwrap(),
            text: format!("{sentiment} take on {topic}"),
            cleaned_text: None,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
    }

    struct JsonSource(&'static str);

    impl CommentSource for JsonSource {
        async fn fetch_comments(&self) -> Result<Vec<RawComment>, AppError> {
            parse_comments(self.0)
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_data_display() {
        let error = AppError::DataError("Invalid data".to_string());
        assert_eq!(error.to_string(), "Data error: Invalid data");
    }

    // ===== Scenarios =====

    #[test]
    fn test_positive_negative_positive_scenario() {
        let comments = vec![
            create_comment(1, "twitter", "sport", "POSITIVE"),
            create_comment(1, "twitter", "sport", "NEGATIVE"),
            create_comment(1, "twitter", "sport", "POSITIVE"),
        ];

        let counts = aggregate::sentiment_counts(&comments);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("POSITIVE"), Some(2));
        assert_eq!(counts.get("NEGATIVE"), Some(1));

        let line: Vec<f64> = aggregate::line_series(&comments)
            .iter()
            .map(|p| p.value)
            .collect();
        assert_eq!(line, vec![1.0, -1.0, 1.0]);

        assert_eq!(aggregate::summary(&comments).comments, 3);
    }

    #[test]
    fn test_empty_raw_list() {
        let store = CommentStore::new();
        let filtered = store.filtered_comments();

        assert_eq!(aggregate::summary(filtered), Summary::default());
        assert!(aggregate::pie_series(filtered).is_empty());
        assert!(aggregate::line_series(filtered).is_empty());
        assert!(aggregate::bar_series(filtered).is_empty());
    }

    #[test]
    fn test_source_filter_scenario() {
        let mut store = CommentStore::from_comments(vec![
            create_comment(1, "twitter", "sport", "POSITIVE"),
            create_comment(2, "reddit", "sport", "NEGATIVE"),
            create_comment(3, "twitter", "politics", "NEUTRAL"),
        ]);

        store.set_filter(Category::Source, ["twitter"]);
        assert_eq!(store.filtered_comments().len(), 2);
        assert!(store.filtered_comments().iter().all(|c| c.source == "twitter"));
    }

    #[test]
    fn test_date_range_excluding_everything() {
        let mut store = CommentStore::from_comments(vec![
            create_comment(1, "twitter", "sport", "POSITIVE"),
            create_comment(2, "reddit", "sport", "NEGATIVE"),
        ]);

        store.set_date_range(Some(day(20)), Some(day(25)));
        let filtered = store.filtered_comments();

        assert!(filtered.is_empty());
        assert!(aggregate::pie_series(filtered).is_empty());
        assert!(aggregate::line_series(filtered).is_empty());
        assert!(aggregate::bar_series(filtered).is_empty());
        assert_eq!(aggregate::summary(filtered), Summary::default());
    }

    #[test]
    fn test_clearing_date_range() {
        let mut store =
            CommentStore::from_comments(vec![create_comment(1, "twitter", "sport", "POSITIVE")]);

        store.set_date_range(Some(day(20)), Some(day(25)));
        assert!(store.filtered_comments().is_empty());

        store.set_date_range(None, None);
        assert_eq!(store.filtered_comments(), store.comments());
    }

    #[test]
    fn test_text_query_combines_with_categories() {
        let mut store = CommentStore::from_comments(vec![
            create_comment(1, "twitter", "sport", "POSITIVE"),
            create_comment(1, "twitter", "politics", "POSITIVE"),
            create_comment(1, "reddit", "sport", "POSITIVE"),
        ]);

        store.set_text_query(Some("SPORT"));
        store.set_filter(Category::Source, ["twitter"]);

        assert_eq!(store.filtered_comments().len(), 1);
        assert_eq!(store.filtered_comments()[0].topic, "sport");
    }

    #[test]
    fn test_sentiment_filter_ignores_case() {
        let mut store = CommentStore::from_comments(vec![
            create_comment(1, "twitter", "sport", "POSITIVE"),
            create_comment(2, "reddit", "sport", "NEGATIVE"),
            create_comment(3, "twitter", "politics", "positive"),
        ]);

        store.set_filter(Category::Sentiment, ["positive"]);
        assert_eq!(store.filtered_comments().len(), 2);
        assert!(
            store
                .filtered_comments()
                .iter()
                .all(|c| c.sentiment.label() == "POSITIVE")
        );
    }

    #[test]
    fn test_load_from_json_payload() {
        let source = JsonSource(
            r#"[
                {"date": "Tue, 01 Oct 2024 10:00:00 GMT", "source": "youtube", "topic": "sport", "sentiment": "POSITIVE", "comment": "Bravo"},
                {"date": "2024-10-02", "source": "hespress", "topic": "politics", "sentiment": "negative"},
                {"source": "hespress", "topic": "politics", "sentiment": "NEUTRAL"},
                "not a record"
            ]"#,
        );

        let mut store = CommentStore::new();
        let report = futures::executor::block_on(store.load(&source)).unwrap();

        assert_eq!(report.loaded, 2);
        assert_eq!(report.rejected, 2);
        assert_eq!(
            aggregate::summary(store.filtered_comments()),
            Summary {
                comments: 2,
                topics: 2,
                sources: 2
            }
        );
    }

    #[test]
    fn test_load_failure_is_reported() {
        let mut store = CommentStore::new();
        let result = futures::executor::block_on(store.load(&JsonSource("{ broken")));

        assert!(matches!(result, Err(AppError::ApiError(_))));
        assert!(store.comments().is_empty());
    }

    // ===== DataState Tests =====

    #[test]
    fn test_data_state_data_extraction() {
        let store = Rc::new(CommentStore::from_comments(vec![create_comment(
            1, "twitter", "sport", "POSITIVE",
        )]));
        let loaded = DataState::Loaded(store.clone());

        assert!(loaded.data().is_some());
        assert_eq!(loaded.data().unwrap(), &store);
        assert!(!loaded.is_loading());

        assert!(DataState::Loading.data().is_none());
        assert!(DataState::Loading.is_loading());
        assert!(DataState::Error("Test error".to_string()).data().is_none());
    }

    #[test]
    fn test_fetch_resolving_after_filter_change_keeps_filter() {
        let state = Rc::new(DataState::Loaded(Rc::new(CommentStore::from_comments(
            vec![
                create_comment(1, "twitter", "sport", "POSITIVE"),
                create_comment(2, "reddit", "sport", "NEGATIVE"),
            ],
        ))));

        // The user narrows the sources while a reload is in flight
        let state = state.reduce(CommentsAction::SetFilter(
            Category::Source,
            vec!["twitter".to_string()],
        ));
        let state = state.reduce(CommentsAction::SetTextQuery("sport".to_string()));

        let fetched = CommentStore::from_comments(vec![
            create_comment(1, "twitter", "sport", "POSITIVE"),
            create_comment(2, "reddit", "sport", "NEGATIVE"),
            create_comment(3, "twitter", "politics", "NEUTRAL"),
            create_comment(4, "twitter", "sport", "NEGATIVE"),
        ]);
        let state = state.reduce(CommentsAction::Fetched(fetched));

        let store = state.data().unwrap();
        assert_eq!(store.comments().len(), 4);
        assert_eq!(store.criteria().text_query(), Some("sport"));
        assert_eq!(store.filtered_comments().len(), 2);
        assert!(store.filtered_comments().iter().all(|c| c.source == "twitter"));
    }

    #[test]
    fn test_first_fetch_and_failures() {
        let state = Rc::new(DataState::Loading);

        // Filters before the first load are ignored
        let state = state.reduce(CommentsAction::ClearFilters);
        assert!(state.is_loading());

        let fetched =
            CommentStore::from_comments(vec![create_comment(1, "twitter", "sport", "POSITIVE")]);
        let state = state.reduce(CommentsAction::Fetched(fetched));
        assert!(state.data().unwrap().criteria().is_empty());
        assert_eq!(state.data().unwrap().filtered_comments().len(), 1);

        let state = state.reduce(CommentsAction::Failed("API error: boom".to_string()));
        assert_eq!(*state, DataState::Error("API error: boom".to_string()));
    }

    // ===== Properties =====

    fn comment_strategy() -> impl Strategy<Value = Comment> {
        (1u32..=28, 0..SOURCES.len(), 0..TOPICS.len(), 0..SENTIMENTS.len()).prop_map(
            |(d, source, topic, sentiment)| {
                create_comment(d, SOURCES[source], TOPICS[topic], SENTIMENTS[sentiment])
            },
        )
    }

    fn subset_strategy(values: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
        proptest::sample::subsequence(values, 0..=values.len())
            .prop_map(|picked| picked.into_iter().map(str::to_string).collect())
    }

    prop_compose! {
        fn store_strategy()(
            comments in prop::collection::vec(comment_strategy(), 0..40),
            sources in subset_strategy(&SOURCES),
            topics in subset_strategy(&TOPICS),
            sentiments in subset_strategy(&SENTIMENTS),
            range in prop::option::of((1u32..=28, 1u32..=28)),
        ) -> (CommentStore, Option<(u32, u32)>) {
            let mut store = CommentStore::from_comments(comments);
            store.set_filter(Category::Source, sources);
            store.set_filter(Category::Topic, topics);
            store.set_filter(Category::Sentiment, sentiments);
            store.set_date_range(range.map(|r| day(r.0)), range.map(|r| day(r.1)));
            (store, range)
        }
    }

    proptest! {
        #[test]
        fn prop_filtered_is_subset_satisfying_all_criteria((store, range) in store_strategy()) {
            let criteria = store.criteria();
            let mut raw = store.comments().iter();

            for comment in store.filtered_comments() {
                // Raw order is preserved, so each element is found further along
                prop_assert!(raw.any(|c| c == comment));

                for category in Category::all() {
                    let accepted = criteria.values(*category);
                    prop_assert!(accepted.is_empty() || accepted.contains(category.value_of(comment)));
                }

                if let Some((a, b)) = range {
                    let (lo, hi) = (a.min(b), a.max(b));
                    let d = comment.date.date_naive();
                    prop_assert!(day(lo) <= d && d <= day(hi));
                }
            }

            let expected = store.comments().iter().filter(|c| criteria.matches(c)).count();
            prop_assert_eq!(store.filtered_comments().len(), expected);
        }

        #[test]
        fn prop_setting_the_same_criteria_twice_is_idempotent((store, _) in store_strategy()) {
            let mut again = store.clone();
            let criteria = store.criteria().clone();
            for category in Category::all() {
                again.set_filter(*category, criteria.values(*category).iter().cloned());
            }
            again.set_date_range(
                criteria.date_range.map(|r| r.start()),
                criteria.date_range.map(|r| r.end()),
            );

            prop_assert_eq!(again.filtered_comments(), store.filtered_comments());
        }

        #[test]
        fn prop_clearing_criteria_restores_raw_list((mut store, _) in store_strategy()) {
            store.clear_filters();
            prop_assert_eq!(store.filtered_comments(), store.comments());
        }

        #[test]
        fn prop_counts_sum_to_length(comments in prop::collection::vec(comment_strategy(), 0..60)) {
            prop_assert_eq!(aggregate::sentiment_counts(&comments).total(), comments.len());
            prop_assert_eq!(aggregate::source_counts(&comments).total(), comments.len());
        }

        #[test]
        fn prop_line_series_preserves_length_and_order(comments in prop::collection::vec(comment_strategy(), 0..60)) {
            let line = aggregate::line_series(&comments);
            prop_assert_eq!(line.len(), comments.len());
            for (point, comment) in line.iter().zip(&comments) {
                prop_assert_eq!(point.value, f64::from(comment.sentiment.trend_value()));
            }
        }
    }
}
