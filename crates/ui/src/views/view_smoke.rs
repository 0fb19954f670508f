use services::QuizEvent;

use super::test_harness::{Step, row, setup_quiz_harness, setup_quiz_harness_with_rows};

#[tokio::test(flavor = "current_thread")]
async fn problem_screen_renders_progress_timer_and_image() {
    let mut harness = setup_quiz_harness(Vec::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("問題 1 / 2（ID: 1）"), "missing progress in {html}");
    assert!(html.contains("この問題: 0分0秒"), "missing timer in {html}");
    assert!(html.contains("data:image/png;base64,"), "missing image in {html}");
    assert!(html.contains("解答を入力する"), "missing answer button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn missing_asset_renders_placeholder() {
    let mut harness = setup_quiz_harness(vec![
        Step::Event(QuizEvent::Skip),
        Step::Event(QuizEvent::Next),
    ]);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("問題 2 / 2（ID: 2）"), "missing progress in {html}");
    assert!(
        html.contains("問題2 の画像が見つかりません。"),
        "missing placeholder in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn solution_screen_shows_graded_table() {
    let mut harness = setup_quiz_harness(vec![
        Step::Event(QuizEvent::EnterAnswers),
        Step::Input("a", "5"),
        Step::Input("b", "11"),
        Step::Event(QuizEvent::Grade),
    ]);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("採点する"), "missing grade button in {html}");
    assert!(html.contains("問題画像を表示"), "missing problem toggle in {html}");
    assert!(
        html.contains("data:image/png;base64,"),
        "missing problem image in {html}"
    );
    assert!(html.contains("正解！"), "missing correct verdict in {html}");
    assert!(html.contains("不正解"), "missing incorrect verdict in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn invalid_event_shows_inline_notice() {
    let mut harness = setup_quiz_harness(vec![Step::Event(QuizEvent::Next)]);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("この画面では操作できません。"), "missing notice in {html}");
    assert!(html.contains("解答を入力する"), "screen should still render: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn last_explain_offers_results() {
    let mut harness = setup_quiz_harness(vec![
        Step::Event(QuizEvent::Skip),
        Step::Event(QuizEvent::Next),
        Step::Event(QuizEvent::Skip),
    ]);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("結果を見る"), "missing results button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn end_screen_lists_records_and_name_field() {
    let mut harness = setup_quiz_harness(vec![
        Step::Event(QuizEvent::EnterAnswers),
        Step::Input("a", "5"),
        Step::Event(QuizEvent::Grade),
        Step::Event(QuizEvent::Explain),
        Step::Event(QuizEvent::Next),
        Step::Event(QuizEvent::Skip),
        Step::Event(QuizEvent::Next),
        Step::Name("山田"),
    ]);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("結果"), "missing heading in {html}");
    assert!(html.contains("タイトル1"), "missing title column in {html}");
    assert!(html.contains("山田"), "missing name in {html}");
    assert!(html.contains("最初からやり直す"), "missing restart in {html}");
    assert!(html.contains("累計:"), "missing cumulative timer in {html}");
    assert!(harness.dir.path().exists());
}

#[tokio::test(flavor = "current_thread")]
async fn empty_answer_key_is_fatal() {
    let mut harness = setup_quiz_harness_with_rows(vec![row("x", "a", "1")], Vec::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("続行できません"), "missing fatal heading in {html}");
}
