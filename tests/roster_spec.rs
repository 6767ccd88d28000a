use astro_roster::models::{AstronautRecord, SignupInput};
use astro_roster::signup::ValidationError;
use astro_roster::store::RosterStore;
use astro_roster::view::{build_view, destination_counts, SortDir, SortKey, ViewState};
use speculate2::speculate;

fn record(name: &str, destination: &str) -> AstronautRecord {
    AstronautRecord {
        name: name.to_string(),
        email: format!("{}@crew.io", name.to_lowercase()),
        role: "Pilot".to_string(),
        destination: destination.to_string(),
        experience: "Rookie".to_string(),
        ..Default::default()
    }
}

fn valid_input(name: &str, email: &str) -> SignupInput {
    SignupInput {
        name: name.to_string(),
        email: email.to_string(),
        role: "Pilot".to_string(),
        destination: "Mars".to_string(),
        experience: "Rookie".to_string(),
        snack: None,
        motto: None,
    }
}

speculate! {
    describe "build_view" {
        before {
            let roster = vec![
                record("Al", "Mars"),
                record("Bo", "Moon"),
                record("Cy", "Mars"),
            ];
        }

        it "returns the full roster in order for an empty filter" {
            let view = build_view(&roster, &ViewState::default());
            let names: Vec<_> = view.iter().map(|e| e.record.name.as_str()).collect();
            assert_eq!(names, vec!["Al", "Bo", "Cy"]);
            let indices: Vec<_> = view.iter().map(|e| e.original_index).collect();
            assert_eq!(indices, vec![0, 1, 2]);
        }

        it "matches substrings case-insensitively" {
            let state = ViewState { filter: "mar".to_string(), sort: None };
            let view = build_view(&roster, &state);
            let names: Vec<_> = view.iter().map(|e| e.record.name.as_str()).collect();
            assert_eq!(names, vec!["Al", "Cy"]);
        }

        it "keeps original indices through filtering" {
            let state = ViewState { filter: "mars".to_string(), sort: None };
            let view = build_view(&roster, &state);
            let indices: Vec<_> = view.iter().map(|e| e.original_index).collect();
            assert_eq!(indices, vec![0, 2]);
        }

        it "matches against the motto field" {
            let mut crew = roster.clone();
            crew[1].motto = "To the stars".to_string();
            let state = ViewState { filter: "STARS".to_string(), sort: None };
            let view = build_view(&crew, &state);
            assert_eq!(view.len(), 1);
            assert_eq!(view[0].original_index, 1);
        }

        it "does not match against snack or experience" {
            let mut crew = roster.clone();
            crew[0].snack = "stroopwafel".to_string();
            let state = ViewState { filter: "stroopwafel".to_string(), sort: None };
            assert!(build_view(&crew, &state).is_empty());
        }

        it "sorts case-insensitively with empty fields first" {
            let mut crew = roster.clone();
            crew[0].name = "al".to_string();
            crew[1].name = String::new();
            let state = ViewState {
                filter: String::new(),
                sort: Some((SortKey::Name, SortDir::Ascending)),
            };
            let view = build_view(&crew, &state);
            let indices: Vec<_> = view.iter().map(|e| e.original_index).collect();
            assert_eq!(indices, vec![1, 0, 2]);
        }

        it "descending reverses the order but keeps equal keys stable" {
            let state = ViewState {
                filter: String::new(),
                sort: Some((SortKey::Destination, SortDir::Descending)),
            };
            let view = build_view(&roster, &state);
            let indices: Vec<_> = view.iter().map(|e| e.original_index).collect();
            // Moon first, then the two Mars rows in insertion order.
            assert_eq!(indices, vec![1, 0, 2]);
        }

        it "filters before sorting" {
            let state = ViewState {
                filter: "mars".to_string(),
                sort: Some((SortKey::Name, SortDir::Descending)),
            };
            let view = build_view(&roster, &state);
            let names: Vec<_> = view.iter().map(|e| e.record.name.as_str()).collect();
            assert_eq!(names, vec!["Cy", "Al"]);
        }
    }

    describe "toggle_sort" {
        it "toggles direction on the same column" {
            let mut state = ViewState::default();
            state.toggle_sort(SortKey::Name);
            assert_eq!(state.sort, Some((SortKey::Name, SortDir::Ascending)));
            state.toggle_sort(SortKey::Name);
            assert_eq!(state.sort, Some((SortKey::Name, SortDir::Descending)));
        }

        it "resets to ascending on a new column" {
            let mut state = ViewState::default();
            state.toggle_sort(SortKey::Name);
            state.toggle_sort(SortKey::Name);
            state.toggle_sort(SortKey::Email);
            assert_eq!(state.sort, Some((SortKey::Email, SortDir::Ascending)));
        }
    }

    describe "destination_counts" {
        it "groups and orders by descending count" {
            let roster = vec![
                record("Al", "Mars"),
                record("Bo", "Moon"),
                record("Cy", "Mars"),
            ];
            let counts = destination_counts(&roster);
            assert_eq!(counts.len(), 2);
            assert_eq!(counts[0].destination, "Mars");
            assert_eq!(counts[0].count, 2);
            assert_eq!(counts[1].destination, "Moon");
            assert_eq!(counts[1].count, 1);
        }

        it "breaks count ties by ascending name" {
            let roster = vec![record("Al", "Moon"), record("Bo", "Europa")];
            let counts = destination_counts(&roster);
            assert_eq!(counts[0].destination, "Europa");
            assert_eq!(counts[1].destination, "Moon");
        }

        it "buckets blank destinations under Unknown" {
            let roster = vec![record("Al", "  "), record("Bo", "")];
            let counts = destination_counts(&roster);
            assert_eq!(counts.len(), 1);
            assert_eq!(counts[0].destination, "Unknown");
            assert_eq!(counts[0].count, 2);
        }
    }

    describe "signup" {
        before {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let store = RosterStore::open(dir.path().join("astronauts.json"))
                .expect("Failed to open store");
        }

        it "appends a valid signup to the roster" {
            let result = astro_roster::signup::submit(&store, valid_input("Al", "al@crew.io"));
            assert!(result.is_ok());

            let roster = store.read_all();
            assert_eq!(roster.len(), 1);
            assert_eq!(roster[0].name, "Al");
            assert_eq!(roster[0].snack, "");
        }

        it "trims whitespace from name and email" {
            let record = astro_roster::signup::submit(&store, valid_input("  Al  ", " al@crew.io "))
                .expect("signup should pass");
            assert_eq!(record.name, "Al");
            assert_eq!(record.email, "al@crew.io");
        }

        it "blocks an email without a dot suffix and leaves storage untouched" {
            let result = astro_roster::signup::submit(&store, valid_input("Al", "bad@x"));
            assert_eq!(result, Err(ValidationError::InvalidEmail));
            assert!(store.read_all().is_empty());
        }

        it "rejects a four-letter suffix" {
            let result = astro_roster::signup::submit(&store, valid_input("Al", "a@b.info"));
            assert_eq!(result, Err(ValidationError::InvalidEmail));
            assert!(store.read_all().is_empty());
        }

        it "reports missing required fields before the email check" {
            let mut input = valid_input("", "bad@x");
            input.experience = String::new();
            let result = astro_roster::signup::submit(&store, input);
            assert_eq!(result, Err(ValidationError::MissingRequired));
            assert!(store.read_all().is_empty());
        }

        it "treats whitespace-only names as missing" {
            let result = astro_roster::signup::submit(&store, valid_input("   ", "al@crew.io"));
            assert_eq!(result, Err(ValidationError::MissingRequired));
        }

        it "keeps optional fields when provided" {
            let mut input = valid_input("Al", "al@crew.io");
            input.snack = Some(" freeze-dried ice cream ".to_string());
            input.motto = Some("Ad astra".to_string());
            let record = astro_roster::signup::submit(&store, input).expect("signup should pass");
            assert_eq!(record.snack, "freeze-dried ice cream");
            assert_eq!(record.motto, "Ad astra");
        }
    }

    describe "remove under an active filter" {
        it "targets the record by original index, not view position" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let store = RosterStore::open(dir.path().join("astronauts.json"))
                .expect("Failed to open store");
            store.write_all(&[
                record("Al", "Mars"),
                record("Bo", "Moon"),
                record("Cy", "Mars"),
            ]);

            // A "mars" filter shows Al and Cy; Cy is the second view row but
            // lives at original index 2.
            let state = ViewState { filter: "mars".to_string(), sort: None };
            let view = build_view(&store.read_all(), &state);
            let target = view[1].original_index;
            assert_eq!(target, 2);

            store.remove(target);
            let names: Vec<_> = store.read_all().into_iter().map(|r| r.name).collect();
            assert_eq!(names, vec!["Al", "Bo"]);
        }
    }

    describe "clear all" {
        it "empties a non-empty roster" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let store = RosterStore::open(dir.path().join("astronauts.json"))
                .expect("Failed to open store");
            store.write_all(&[record("Al", "Mars"), record("Bo", "Moon")]);
            store.clear();
            assert!(store.read_all().is_empty());
        }
    }
}
