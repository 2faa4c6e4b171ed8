/// End-to-end MCP session tests over a mocked stdin
use mood_journal_mcp::mcp::McpServer;
use mood_journal_mcp::*;
use serde_json::{json, Value};
use std::path::PathBuf;
use tokio::io::BufReader;

fn journal(medium: MemoryBlobStore) -> MoodJournalServer<MemoryBlobStore> {
    let config = JournalConfig::new(PathBuf::from("unused.db"))
        .with_offset_minutes(0)
        .unwrap();
    MoodJournalServer::with_medium(medium, config)
}

fn request(id: i64, method: &str, params: Value) -> String {
    format!(
        "{}\n",
        json!({"jsonrpc": "2.0", "id": id, "method": method, "params": params})
    )
}

fn tool_call(id: i64, name: &str, arguments: Value) -> String {
    request(id, "tools/call", json!({"name": name, "arguments": arguments}))
}

/// Feed `lines` to a server and collect its responses
async fn session(
    server: &mut McpServer<MemoryBlobStore>,
    lines: &[String],
) -> Vec<Value> {
    let mut builder = tokio_test::io::Builder::new();
    for line in lines {
        builder.read(line.as_bytes());
    }
    let reader = BufReader::new(builder.build());
    let mut output: Vec<u8> = Vec::new();

    server
        .serve(reader, &mut output)
        .await
        .expect("session failed");

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[cfg(test)]
mod server_integration_tests {
    use super::*;

    #[tokio::test]
    async fn test_full_session() {
        let mut server = McpServer::new(journal(MemoryBlobStore::new()));

        let lines = vec![
            request(1, "initialize", json!({})),
            "{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n".to_string(),
            tool_call(2, "mood_log", json!({"mood": "good", "energy": 90, "sleep": 8, "activities": ["work", "exercise"]})),
            tool_call(3, "mood_log", json!({"mood": "Low", "date": "2024-01-15", "note": "Tired"})),
            tool_call(4, "mood_list", json!({})),
            tool_call(5, "mood_summary", json!({})),
            tool_call(6, "mood_trend", json!({"field": "sleep"})),
            request(7, "resources/list", json!({})),
        ];

        let responses = session(&mut server, &lines).await;
        // The notification gets no response
        assert_eq!(responses.len(), 7);

        assert_eq!(responses[0]["id"], json!(1));
        assert_eq!(responses[0]["result"]["protocolVersion"], json!("2024-11-05"));

        for response in &responses[1..6] {
            assert_eq!(response["result"]["isError"], json!(false), "{}", response);
        }

        let listed = &responses[3]["result"]["structuredContent"];
        assert_eq!(listed["total"], json!(2));
        // Newest first, so the entry logged last comes first
        assert_eq!(listed["entries"][0]["mood"], json!("Low"));
        assert_eq!(listed["entries"][1]["energy_level"], json!("High"));

        let summary = &responses[4]["result"]["structuredContent"]["summary"];
        assert_eq!(summary["total_entries"], json!(2));
        assert_eq!(summary["dominant_mood"], json!("Low"));
        // (4 + 2) / 2 = 3
        assert_eq!(summary["average_mood_score"], json!(60));

        let trend = &responses[5]["result"]["structuredContent"];
        assert_eq!(trend["field"], json!("sleep"));
        // Oldest first: the backdated entry precedes today's
        assert_eq!(trend["points"][0]["value"], json!(7.0));
        assert_eq!(trend["points"][1]["value"], json!(8.0));

        assert_eq!(responses[6]["error"]["code"], json!(-32601));

        assert_eq!(server.journal().store().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_writes_keep_session_state() {
        let medium = MemoryBlobStore::new();
        medium.set_fail_writes(true);
        let mut server = McpServer::new(journal(medium));

        let responses = session(
            &mut server,
            &[tool_call(1, "mood_log", json!({"mood": "Okay"}))],
        )
        .await;

        let result = &responses[0]["result"];
        assert_eq!(result["isError"], json!(false));
        assert!(result["structuredContent"]["warning"].is_string());
        assert_eq!(server.journal().store().len(), 1);
    }

    #[tokio::test]
    async fn test_note_for_unknown_entry_is_a_no_op() {
        let mut server = McpServer::new(journal(MemoryBlobStore::new()));

        let responses = session(
            &mut server,
            &[
                tool_call(1, "mood_log", json!({"mood": "Great"})),
                tool_call(
                    2,
                    "mood_note",
                    json!({"entry_id": "00000000-0000-0000-0000-000000000000", "note": "x"}),
                ),
            ],
        )
        .await;

        let result = &responses[1]["result"]["structuredContent"];
        assert_eq!(result["found"], json!(false));
        assert_eq!(server.journal().store().entries()[0].note, "");
    }
}
