// Integration tests for the tool surface: argument handling, result shape
// and error rendering as seen by an MCP client.

use mcp_reasoning::stdio::{ReasoningServer, ToolName, invoke};
use serde_json::{Map, Value, json};

fn args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("arguments must be an object, got {other}"),
    }
}

fn call(tool: ToolName, arguments: Value) -> Value {
    let text = invoke(tool, args(arguments)).expect("tool call failed");
    serde_json::from_str(&text).expect("payload is not JSON")
}

fn step(prompt: &str, thought: &str, number: u32, total: u32, next: bool) -> Value {
    json!({
        "prompt": prompt,
        "thought": thought,
        "thoughtNumber": number,
        "totalThoughts": total,
        "nextThoughtNeeded": next,
    })
}

#[test]
fn test_mcts_first_step() {
    let mut request = step("sort a list", "start", 1, 3, true);
    request["numSimulations"] = json!(10);
    let result = call(ToolName::MctsReasoning, request);

    assert_eq!(result["strategy"], "mcts");
    assert_eq!(result["originalPrompt"], "sort a list");
    assert_eq!(result["currentThought"], "start");
    assert_eq!(result["thoughtNumber"], 1);
    assert_eq!(result["totalThoughts"], 3);
    assert_eq!(result["complete"], false);
    let next = result["nextThought"].as_str().unwrap();
    assert!(next.contains("Step 2/3"), "{next}");
    assert!(next.contains("start"), "{next}");
    assert!(next.contains("10 simulations"), "{next}");
}

#[test]
fn test_last_step_completes_even_when_more_requested() {
    let mut request = step("x", "y", 3, 3, true);
    request["numSimulations"] = json!(10);
    let result = call(ToolName::MctsReasoning, request);
    assert_eq!(result["complete"], true);
}

#[test]
fn test_complete_rule_holds_for_every_stepwise_tool() {
    let tools = [
        ToolName::MctsReasoning,
        ToolName::BeamSearchReasoning,
        ToolName::HybridReasoning,
    ];
    for tool in tools {
        for (number, total) in [(1, 1), (1, 4), (2, 4), (4, 4), (6, 4)] {
            for next in [true, false] {
                let result = call(tool, step("p", "t", number, total, next));
                let expected = !next || number >= total;
                assert_eq!(result["complete"], expected, "{tool} {number}/{total} next={next}");
                if !next {
                    assert_eq!(result["nextThought"], "", "{tool}");
                }
            }
        }
    }
}

#[test]
fn test_empty_prompt_fails_validation() {
    let err = invoke(
        ToolName::BeamSearchReasoning,
        args(step("", "y", 1, 1, false)),
    )
    .unwrap_err();
    assert_eq!(
        mcp_reasoning::error::handle_tool_error(&err),
        "Validation error: Prompt is required"
    );
}

#[test]
fn test_empty_thought_fails_validation() {
    let err = invoke(ToolName::HybridReasoning, args(step("p", "", 1, 2, true))).unwrap_err();
    assert_eq!(
        mcp_reasoning::error::handle_tool_error(&err),
        "Validation error: Current thought is required"
    );
}

#[test]
fn test_out_of_range_tunables_fail_validation() {
    let cases = [
        (ToolName::MctsReasoning, "numSimulations", 0),
        (ToolName::MctsReasoning, "numSimulations", 151),
        (ToolName::HybridReasoning, "numSimulations", -1),
        (ToolName::BeamSearchReasoning, "beamWidth", 0),
        (ToolName::BeamSearchReasoning, "beamWidth", 11),
    ];
    for (tool, field, value) in cases {
        let mut request = step("p", "t", 1, 2, true);
        request[field] = json!(value);
        let err = invoke(tool, args(request)).unwrap_err();
        assert!(err.is_validation(), "{tool} {field}={value}: {err:?}");
    }
}

#[test]
fn test_defaults_apply_when_tunable_absent() {
    let mcts = call(ToolName::MctsReasoning, step("p", "t", 1, 2, true));
    assert!(mcts["nextThought"].as_str().unwrap().contains("50 simulations"));
    let beam = call(ToolName::BeamSearchReasoning, step("p", "t", 1, 2, true));
    assert!(beam["nextThought"].as_str().unwrap().contains("Considering 3 alternative paths"));
}

#[test]
fn test_zero_thought_number_rejected() {
    let err = invoke(ToolName::MctsReasoning, args(step("p", "t", 0, 2, true))).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_whole_numbers_sent_as_floats() {
    let mut request = step("p", "t", 1, 3, true);
    request["thoughtNumber"] = json!(2.0);
    request["numSimulations"] = json!(10.0);
    let result = call(ToolName::MctsReasoning, request);
    assert_eq!(result["thoughtNumber"], 2);
    let next = result["nextThought"].as_str().unwrap();
    assert!(next.starts_with("MCTS Reasoning (Step 3/3): "), "{next}");
    assert!(next.contains("10 simulations"), "{next}");

    let mut request = step("p", "t", 1, 3, true);
    request["thoughtNumber"] = json!(2.5);
    let err = invoke(ToolName::MctsReasoning, args(request)).unwrap_err();
    assert!(err.is_validation(), "{err:?}");
}

#[test]
fn test_null_tunable_is_not_a_default() {
    for (tool, field) in [
        (ToolName::MctsReasoning, "numSimulations"),
        (ToolName::HybridReasoning, "numSimulations"),
        (ToolName::BeamSearchReasoning, "beamWidth"),
    ] {
        let mut request = step("p", "t", 1, 2, true);
        request[field] = Value::Null;
        let err = invoke(tool, args(request)).unwrap_err();
        assert!(err.is_validation(), "{tool} {field}=null: {err:?}");
    }
}

#[test]
fn test_thought_numbers_beyond_u32() {
    let mut request = step("p", "t", 1, 1, true);
    request["thoughtNumber"] = json!(4_294_967_295u64);
    request["totalThoughts"] = json!(5_000_000_000u64);
    let result = call(ToolName::HybridReasoning, request);
    assert_eq!(result["totalThoughts"], 5_000_000_000u64);
    assert_eq!(result["complete"], false);
    let next = result["nextThought"].as_str().unwrap();
    assert!(next.contains("(Step 4294967296/5000000000)"), "{next}");
}

#[test]
fn test_r1_is_idempotent() {
    let first = call(ToolName::R1Reasoning, json!({ "prompt": "design a cache" }));
    let second = call(ToolName::R1Reasoning, json!({ "prompt": "design a cache" }));
    assert_eq!(first["reasoning"], second["reasoning"]);
    assert_eq!(first["complete"], true);
    assert_eq!(first["strategy"], "r1_transformer");
}

#[test]
fn test_reason_r1() {
    let result = call(ToolName::ReasonR1, json!({ "query": "explain recursion" }));
    assert_eq!(result["strategy"], "r1_transformer");
    assert_eq!(result["complete"], true);
    assert!(result.get("allThoughts").is_none());
    let reasoning = result["reasoning"].as_str().unwrap();
    assert!(reasoning.contains("explain recursion"));
    for n in 1..=5 {
        assert!(reasoning.contains(&format!("{n}. ")), "missing point {n}");
    }
}

#[test]
fn test_reason_hybrid_trace() {
    let result = call(ToolName::ReasonHybrid, json!({ "query": "plan a trip" }));
    assert_eq!(result["strategy"], "hybrid_transformer_mcts");
    assert_eq!(result["thoughtNumber"], 3);
    assert_eq!(result["totalThoughts"], 3);
    assert_eq!(result["complete"], true);

    let thoughts: Vec<&str> = result["allThoughts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t.as_str().unwrap())
        .collect();
    assert_eq!(thoughts.len(), 3);
    assert!(thoughts[0].contains("plan a trip"));
    for pair in thoughts.windows(2) {
        let prefix: String = pair[0].chars().take(50).collect();
        assert!(pair[1].contains(&format!("\"{prefix}...\"")));
    }
}

#[test]
fn test_reason_stepwise_commands_run_three_steps() {
    for (tool, tag) in [
        (ToolName::ReasonMcts, "mcts"),
        (ToolName::ReasonBeam, "beam_search"),
    ] {
        let result = call(tool, json!({ "query": "q" }));
        assert_eq!(result["strategy"], tag);
        assert_eq!(result["allThoughts"].as_array().unwrap().len(), 3);
        assert_eq!(result["thoughtNumber"], result["totalThoughts"]);
    }
}

#[test]
fn test_server_wraps_results_in_text_content() {
    let server = ReasoningServer::default();
    let result = server
        .dispatch("reason_mcts", Some(args(json!({ "query": "q" }))))
        .unwrap();
    let wire = serde_json::to_value(&result).unwrap();
    let content = wire["content"].as_array().unwrap();
    assert_eq!(content.len(), 1);
    assert_eq!(content[0]["type"], "text");
    let text = content[0]["text"].as_str().unwrap();
    assert!(text.starts_with("{\n  \"strategy\": \"mcts\""));
    assert_ne!(wire["isError"], true);
}

#[test]
fn test_server_reports_tool_failures_as_error_results() {
    let server = ReasoningServer::default();
    let result = server
        .dispatch("r1_reasoning", Some(args(json!({ "prompt": "" }))))
        .unwrap();
    let wire = serde_json::to_value(&result).unwrap();
    assert_eq!(wire["isError"], true);
    assert_eq!(
        wire["content"][0]["text"],
        "Validation error: Prompt is required"
    );
}

#[test]
fn test_server_rejects_unknown_and_disabled_tools() {
    let server = ReasoningServer::default();
    assert!(server.dispatch("no_such_tool", None).is_err());

    let only_r1 = ReasoningServer::new(Some(["r1_reasoning".to_string()].into_iter().collect()));
    assert!(only_r1.dispatch("reason_mcts", Some(args(json!({ "query": "q" })))).is_err());
    assert!(only_r1.dispatch("r1_reasoning", Some(args(json!({ "prompt": "p" })))).is_ok());

    let names: Vec<String> = only_r1.tools().iter().map(|t| t.name.to_string()).collect();
    assert_eq!(names, vec!["r1_reasoning"]);
    assert_eq!(ReasoningServer::default().tools().len(), 8);
}
