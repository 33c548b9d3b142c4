//! Library API integration tests
use recorte_core::*;
use wiremock::matchers::{header, headers, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_extract_then_optimize_is_identity_under_budget() {
    let html = "<html><body><h1>Lei 8.078</h1><p>Art. 1º Disposições gerais.</p></body></html>";
    let text = extract_text(html);
    assert_eq!(text, "Lei 8.078 Art. 1º Disposições gerais.");

    // Under the budget nothing is trimmed and no marker is appended.
    let optimized = optimize_content(&text);
    assert_eq!(optimized, text);
    assert!(!optimized.contains("[Conteúdo"));
}

#[test]
fn test_pipeline_is_deterministic() {
    let html = format!("<p>A lei diz: {}</p>", "considerando ".repeat(2_000));
    let first = optimize_content(&extract_text(&html));
    let second = optimize_content(&extract_text(&html));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_batch_preserves_order_and_isolates_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/primeiro"))
        .and(header("User-Agent", "Mozilla/5.0 (compatible; Bot/1.0)"))
        .and(headers("Accept", vec!["text/html", "text/plain", "*/*"]))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<p>pagina um</p>", "text/html"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/segundo"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/terceiro"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("pagina tres", "text/plain"))
        .mount(&server)
        .await;

    let urls = vec![
        format!("{}/primeiro", server.uri()),
        format!("{}/segundo", server.uri()),
        format!("{}/terceiro", server.uri()),
    ];

    let processor = LinkProcessor::new().unwrap();
    // URLs are processed strictly sequentially, so records come back in
    // input order by construction.
    let results = processor.process_links(&urls).await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].url, urls[0]);
    assert_eq!(results[1].url, urls[1]);
    assert_eq!(results[2].url, urls[2]);

    assert!(results[0].success);
    assert_eq!(results[0].content, "pagina um");

    assert!(!results[1].success);
    assert_eq!(results[1].error.as_deref(), Some("HTTP 404"));
    assert!(results[1].content.is_empty());

    // The middle failure does not affect its neighbors.
    assert!(results[2].success);
    assert_eq!(results[2].content, "pagina tres");
}

#[tokio::test]
async fn test_timed_out_url_is_contained() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rapida"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<p>um</p>", "text/html"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/lenta"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<p>dois</p>", "text/html")
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/outra"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<p>tres</p>", "text/html"))
        .mount(&server)
        .await;

    // A short timeout keeps the test fast; the contract is the same as the
    // production 15 second default.
    let config = ProcessorConfig {
        fetch: FetchConfig { timeout: 1, ..Default::default() },
        ..Default::default()
    };
    let processor = LinkProcessor::with_config(config).unwrap();

    let urls = vec![
        format!("{}/rapida", server.uri()),
        format!("{}/lenta", server.uri()),
        format!("{}/outra", server.uri()),
    ];
    let results = processor.process_links(&urls).await;

    assert_eq!(results.len(), 3);
    assert!(results[0].success);
    assert!(!results[1].success);
    assert!(results[1].error.as_deref().is_some_and(|e| !e.is_empty()));
    assert!(results[2].success);
    assert_eq!(results[2].content, "tres");
}

#[tokio::test]
async fn test_non_html_body_bypasses_extraction() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/plano"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<b>sem parse</b>", "text/plain"))
        .mount(&server)
        .await;

    let processor = LinkProcessor::new().unwrap();
    let record = processor.process_link(&format!("{}/plano", server.uri())).await;

    assert!(record.success);
    assert_eq!(record.content, "<b>sem parse</b>");
}

#[tokio::test]
async fn test_duplicate_urls_fetched_once_per_batch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repetida"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<p>conteudo</p>", "text/html"))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/repetida", server.uri());
    let urls = vec![url.clone(), url.clone()];

    let processor = LinkProcessor::new().unwrap();
    let results = processor.process_links(&urls).await;

    assert_eq!(results.len(), 2);
    assert!(results[0].success && results[1].success);
    assert_eq!(results[0].content, results[1].content);
}

#[tokio::test]
async fn test_unreachable_host_is_contained() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<p>ok</p>", "text/html"))
        .mount(&server)
        .await;

    let urls = vec![
        "http://127.0.0.1:1/refused".to_string(),
        format!("{}/ok", server.uri()),
    ];

    let processor = LinkProcessor::new().unwrap();
    let results = processor.process_links(&urls).await;

    assert_eq!(results.len(), 2);
    assert!(!results[0].success);
    assert!(results[0].error.as_deref().is_some_and(|e| !e.is_empty()));
    assert!(results[1].success);
}

#[tokio::test]
async fn test_oversized_page_is_trimmed_with_marker() {
    let server = MockServer::start().await;

    let body = format!(
        "<html><body><p>{}</p></body></html>",
        "conteudo juridico sobre direito civil ".repeat(500)
    );
    Mock::given(method("GET"))
        .and(path("/grande"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html"))
        .mount(&server)
        .await;

    let processor = LinkProcessor::new().unwrap();
    let record = processor.process_link(&format!("{}/grande", server.uri())).await;

    assert!(record.success);
    assert!(record.content.chars().count() < 13_000);
    assert!(record.content.contains("[Conteúdo"));
}
