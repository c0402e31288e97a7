#[cfg(test)]
mod test {
    use crate::tests::*;

    /// Follows "Continue" from `start` until there is no continue control,
    /// answering every quiz correctly on the way.
    fn continue_to_the_end(navigator: &mut Navigator<RecordingSink, MapView>, start: &str) -> Vec<String> {
        navigator.go_to(start).unwrap();
        let mut visited = vec![start.to_string()];
        loop {
            if let Some(Destination::Quiz(id)) = navigator.state().current().cloned() {
                let correct = navigator.catalog.quiz(id).unwrap().correct;
                navigator.select_option(correct).unwrap();
                navigator.submit().unwrap();
            }
            if navigator.continue_on().is_err() {
                return visited;
            }
            visited.push(navigator.state().current_id().unwrap());
        }
    }

    fn back_to_the_start(navigator: &mut Navigator<RecordingSink, MapView>) -> Vec<String> {
        let mut visited = vec![navigator.state().current_id().unwrap()];
        while navigator.go_back().is_ok() {
            visited.push(navigator.state().current_id().unwrap());
        }
        visited
    }

    #[test]
    fn continue_walks_the_whole_portal() {
        let mut navigator = navigator();
        let visited = continue_to_the_end(&mut navigator, "welcome");

        assert_eq!(
            visited,
            vec![
                "welcome",
                "team",
                "values",
                "internaltools",
                "whydolf",
                "companytourvideo",
                "platformdemo",
                "quiz1",
                "quiz2",
                "quiz3",
                "quiz4",
                "locations",
                "contact",
            ]
        );
    }

    #[test]
    fn previous_from_the_end_stops_at_the_first_quiz() {
        let mut navigator = navigator();
        continue_to_the_end(&mut navigator, "welcome");

        // Quiz pages have no previous control.
        assert_eq!(
            back_to_the_start(&mut navigator),
            vec!["contact", "locations", "quiz1"]
        );
    }

    #[test]
    fn round_trip_is_broken_across_the_video_tour() {
        let mut navigator = navigator();
        let forward = continue_to_the_end(&mut navigator, "welcome");

        navigator.go_to("tutorialvideos").unwrap();
        let mut backward = back_to_the_start(&mut navigator);
        backward.reverse();

        assert_eq!(
            backward,
            vec![
                "welcome",
                "team",
                "values",
                "internaltools",
                "whydolf",
                "companytourvideo",
                "platformdemo",
                "tutorialvideos",
            ]
        );
        // "Continue" leaves platformdemo for quiz1 and never shows tutorialvideos.
        assert!(!forward.contains(&"tutorialvideos".to_string()));
        assert_eq!(forward[..7], backward[..7]);
    }

    #[test]
    fn sequencer_alone_round_trips_up_to_the_tour() {
        // Without page links, "Continue" stops at the first tour video.
        let mut current = "welcome".to_string();
        let mut forward = vec![current.clone()];
        while let Some(next) = sequencer::next(&current) {
            forward.push(next.clone());
            current = next;
        }
        assert_eq!(forward.last().map(String::as_str), Some("companytourvideo"));

        let mut backward = vec![current.clone()];
        while let Some(previous) = sequencer::previous(&current) {
            backward.push(previous.clone());
            current = previous;
        }
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn tutorial_videos_continue_lands_on_a_quiz_awaiting_submit() {
        let mut navigator = navigator();
        navigator.go_to("tutorialvideos").unwrap();
        navigator.continue_on().unwrap();

        let render = navigator.sink().last_render();
        assert_eq!(render.id, "quiz1");
        assert_eq!(render.title, "What is Dolf Technology a pioneer in?");
        assert!(render.submit);
        assert_eq!(render.next, Some(Control::hidden("quiz2")));
        assert_eq!(
            navigator.continue_on(),
            Err(NavigationError::NoSuchControl {
                control: ControlKind::Continue
            })
        );
    }

    #[test]
    fn unanswered_submit_prompts_and_changes_nothing() {
        let mut navigator = navigator();
        navigator.go_to("quiz1").unwrap();

        assert_eq!(navigator.submit(), Ok(Evaluation::Unanswered));
        let feedback = navigator.sink().feedback.last().unwrap();
        assert_eq!(feedback.message(), "Please select an answer.");
        assert_eq!(feedback.next, None);
        assert!(navigator.continue_on().is_err());
        assert_eq!(navigator.state().current_id().as_deref(), Some("quiz1"));
    }

    #[test]
    fn correct_answer_reveals_continue_to_the_next_quiz() {
        let mut navigator = navigator();
        navigator.go_to("quiz1").unwrap();

        assert_eq!(
            navigator.select_option(1).as_deref(),
            Ok("Digital Transformation")
        );
        assert_eq!(navigator.submit(), Ok(Evaluation::Correct));

        let feedback = navigator.sink().feedback.last().unwrap();
        assert_eq!(feedback.message(), "Correct!");
        assert_eq!(feedback.next, Some(Control::to("quiz2")));
        assert_eq!(navigator.sink().feedback.len(), 1);

        navigator.continue_on().unwrap();
        assert_eq!(navigator.state().current_id().as_deref(), Some("quiz2"));
    }

    #[test]
    fn egypt_tab_recenters_the_map() {
        let mut navigator = navigator();
        navigator.go_to("locations").unwrap();
        navigator
            .select_branch(MapScope::Branch(Branch::Egypt))
            .unwrap();

        let map = navigator.map();
        assert_eq!(map.markers().len(), 1);
        assert_eq!(map.markers()[0].label, "Egypt Branch");
        assert_eq!(
            map.viewport(),
            Some(&Viewport::Center {
                at: onboard_common::Coordinate::new(30.0444, 31.2357),
                zoom: 17,
            })
        );
        assert_eq!(
            map.address(),
            "DOLF TECHNOLOGIES، 3 Abd El-Salam Ibrahim, Al Matar, El Nozha, Cairo Governorate 4470311, Egypt"
        );
        assert_eq!(navigator.sink().renders.len(), 1);
    }

    #[test]
    fn previous_through_the_tour_returns_to_why_dolf() {
        let mut navigator = navigator();
        navigator.go_to("platformdemo").unwrap();
        navigator.go_back().unwrap();
        assert_eq!(
            navigator.state().current_id().as_deref(),
            Some("companytourvideo")
        );
        navigator.go_back().unwrap();
        assert_eq!(navigator.state().current_id().as_deref(), Some("whydolf"));
    }
}
