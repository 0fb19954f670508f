use chrono::Duration;
use quiz_core::model::{AssetLookup, AssetRole, ProblemId, QuizPhase, Verdict};
use quiz_core::time::{JA_UNITS, fixed_now};
use services::{
    AppServices, Clock, QuizConfig, QuizEvent, SaveOutcome, SessionError, graded_rows,
    result_rows,
};
use storage::Storage;

const ANSWER_KEY: &str = "\
タイトル,ID,小問,問題レベル,答え,解説動画
図形,1,a,A,5,
図形,1,b,A,10,https://example.com/v1
関数,2,a,B,3.0,
";

fn content_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("解答.csv"), ANSWER_KEY).unwrap();
    std::fs::write(dir.path().join("問題1.png"), b"png").unwrap();
    std::fs::write(dir.path().join("解説1.pdf"), b"%PDF-1.4").unwrap();
    dir
}

#[test]
fn full_quiz_walk_grades_and_exports() {
    let dir = content_dir();
    let out = dir.path().join("out");
    let config = QuizConfig::new(dir.path()).with_output_dir(&out);
    let services = AppServices::load(
        config,
        Clock::fixed(fixed_now()),
        &Storage::filesystem(dir.path()),
    )
    .unwrap();

    assert_eq!(
        services.asset(AssetRole::Problem, ProblemId::new(1)),
        AssetLookup::Found(dir.path().join("問題1.png").as_path())
    );
    assert_eq!(
        services.asset(AssetRole::Problem, ProblemId::new(2)),
        AssetLookup::NotFound
    );

    let mut clock = Clock::fixed(fixed_now());
    let machine = (*services.machine()).clone().with_clock(clock);
    let mut state = machine.start();
    assert_eq!(machine.problem_ids(), &[ProblemId::new(1), ProblemId::new(2)]);

    machine.transition(&mut state, QuizEvent::EnterAnswers).unwrap();
    machine.record_input(&mut state, "a", " 5 ").unwrap();
    machine.record_input(&mut state, "b", "11").unwrap();

    clock.advance(Duration::seconds(42));
    let machine = machine.with_clock(clock);
    machine.transition(&mut state, QuizEvent::Grade).unwrap();

    let graded = graded_rows(&state, ProblemId::new(1));
    let verdicts: Vec<Verdict> = graded.iter().map(|row| row.verdict).collect();
    assert_eq!(verdicts, vec![Verdict::Correct, Verdict::Incorrect]);
    assert_eq!(graded[0].user_input, "5");

    machine.transition(&mut state, QuizEvent::Explain).unwrap();
    machine.transition(&mut state, QuizEvent::Next).unwrap();
    assert_eq!(state.phase, QuizPhase::Problem);
    assert_eq!(machine.progress(&state).unwrap().position, 2);

    machine.transition(&mut state, QuizEvent::EnterAnswers).unwrap();
    machine.record_input(&mut state, "a", "3.0").unwrap();
    machine.transition(&mut state, QuizEvent::Grade).unwrap();
    assert_eq!(
        graded_rows(&state, ProblemId::new(2))[0].verdict,
        Verdict::Incorrect
    );

    machine.transition(&mut state, QuizEvent::Explain).unwrap();
    assert_eq!(
        machine.transition(&mut state, QuizEvent::Next).unwrap(),
        QuizPhase::End
    );
    assert_eq!(result_rows(&state, JA_UNITS).len(), 3);

    let exports = services.exports();
    assert_eq!(
        exports.save_results(&state).unwrap(),
        SaveOutcome::NameRequired
    );
    state.user_name = "山田".to_string();
    let SaveOutcome::Saved(path) = exports.save_results(&state).unwrap() else {
        panic!("expected the results csv to be written");
    };
    let text = String::from_utf8(std::fs::read(path).unwrap()).unwrap();
    assert!(text.starts_with('\u{feff}'));
    assert!(text.contains("1,a,5,5,正解！,0分42秒,0分42秒,図形,A"));
    assert!(text.contains("1,b,11,10,不正解,"));
    assert!(text.contains("2,a,3.0,3,不正解,"));

    machine.transition(&mut state, QuizEvent::Restart).unwrap();
    assert_eq!(state.phase, QuizPhase::Problem);
    assert!(state.answers.is_empty());
}

#[test]
fn skipped_problem_has_no_records() {
    let dir = content_dir();
    let services = AppServices::load(
        QuizConfig::new(dir.path()),
        Clock::fixed(fixed_now()),
        &Storage::filesystem(dir.path()),
    )
    .unwrap();
    let machine = services.machine();
    let mut state = machine.start();

    machine.transition(&mut state, QuizEvent::Skip).unwrap();
    assert_eq!(state.phase, QuizPhase::Explain);
    assert!(state.answers.is_empty());
    assert_eq!(
        machine.transition(&mut state, QuizEvent::Grade),
        Err(SessionError::InvalidTransition {
            phase: QuizPhase::Explain,
            event: QuizEvent::Grade,
        })
    );
}

#[test]
fn asset_pdf_passthrough_lands_in_output_dir() {
    let dir = content_dir();
    let services = AppServices::load(
        QuizConfig::new(dir.path()),
        Clock::fixed(fixed_now()),
        &Storage::filesystem(dir.path()),
    )
    .unwrap();
    let AssetLookup::Found(asset) = services.asset(AssetRole::Solution, ProblemId::new(1)) else {
        panic!("solution asset should be indexed");
    };
    let written = services.exports().save_asset_pdf(asset).unwrap();
    assert_eq!(written, dir.path().join("results").join("解説1.pdf"));
    assert_eq!(std::fs::read(written).unwrap(), b"%PDF-1.4");
}

#[test]
fn missing_answer_key_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppServices::load(
        QuizConfig::new(dir.path()),
        Clock::default_clock(),
        &Storage::filesystem(dir.path()),
    )
    .unwrap_err();
    assert!(err.to_string().contains("no readable answer key"));
}

#[test]
fn default_downloads_are_not_reloaded_as_content() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("math.csv"),
        "タイトル,ID,小問,問題レベル,答え,解説動画\n図形,1,a,A,5,\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("問題1.jpg"), b"jpg").unwrap();
    std::fs::write(dir.path().join("解説1.pdf"), b"%PDF-1.4").unwrap();

    let load = || {
        AppServices::load(
            QuizConfig::new(dir.path()),
            Clock::fixed(fixed_now()),
            &Storage::filesystem(dir.path()),
        )
        .unwrap()
    };

    let first = load();
    let machine = first.machine();
    let mut state = machine.start();
    machine.transition(&mut state, QuizEvent::EnterAnswers).unwrap();
    machine.record_input(&mut state, "a", "5").unwrap();
    machine.transition(&mut state, QuizEvent::Grade).unwrap();
    machine.transition(&mut state, QuizEvent::Explain).unwrap();
    machine.transition(&mut state, QuizEvent::Next).unwrap();
    state.user_name = "Aiko".to_string();

    let SaveOutcome::Saved(results) = first.exports().save_results(&state).unwrap() else {
        panic!("expected the results csv to be written");
    };
    assert_eq!(results.parent(), Some(dir.path().join("results").as_path()));
    let AssetLookup::Found(solution) = first.asset(AssetRole::Solution, ProblemId::new(1)) else {
        panic!("solution asset should be indexed");
    };
    first.exports().save_asset_pdf(solution).unwrap();
    // A rendition sitting next to the source would outrank 問題1.jpg.
    std::fs::write(dir.path().join("results").join("問題1.pdf"), b"%PDF-1.4").unwrap();

    let second = load();
    let machine = second.machine();
    assert_eq!(
        machine.answer_key().source(),
        Some(dir.path().join("math.csv").as_path())
    );
    assert_eq!(machine.answer_key().rows()[0].correct_answer, "5");
    assert_eq!(
        second.asset(AssetRole::Problem, ProblemId::new(1)),
        AssetLookup::Found(dir.path().join("問題1.jpg").as_path())
    );
}
