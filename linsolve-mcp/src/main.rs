//! Linsolve MCP Server
//!
//! Line-delimited JSON-RPC over stdio.
//!
//! Tools:
//! - solve: Solve a square linear system step by step
//! - example: Get a built-in example system
//! - list_methods: List available solving methods
//! - help: Get documentation for a method

mod config;

use config::ServerConfig;
use linsolve::{example_system, Language, Linsolve, Renderer, SystemInput};
use std::io::{self, BufRead, IsTerminal, Write};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "linsolve";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

// MCP Protocol types
#[derive(Debug, Deserialize)]
struct McpRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpError {
    fn invalid_params(message: impl Into<String>) -> Self {
        Self { code: -32602, message: message.into(), data: None }
    }
}

/// Engine plus the configured fallback method
struct Server {
    engine: Linsolve,
    default_method: String,
}

impl Server {
    fn new(config: &ServerConfig) -> Self {
        let engine = Linsolve::with_standard_methods()
            .with_language(config.language)
            .with_size_limits(config.min_size, config.max_size);

        let default_method = if engine.help(Some(&config.default_method)).is_ok() {
            config.default_method.clone()
        } else {
            warn!(
                method = %config.default_method,
                "unknown LINSOLVE_DEFAULT_METHOD, using {}", config::DEFAULT_METHOD
            );
            config::DEFAULT_METHOD.to_string()
        };

        Self { engine, default_method }
    }
}

fn init_logging() {
    // stdout carries the protocol, so logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() {
    init_logging();

    let config = ServerConfig::from_env();
    let server = Server::new(&config);

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "Linsolve MCP Server started");
    info!(
        language = ?config.language,
        min_size = config.min_size,
        max_size = config.max_size,
        default_method = %server.default_method,
        "configuration loaded"
    );
    debug!(
        stdin_terminal = io::stdin().is_terminal(),
        stdout_terminal = io::stdout().is_terminal(),
        "stdio"
    );

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());
    let mut stdout = io::stdout();

    info!("Server ready, waiting for requests...");

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("Client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                debug!(bytes = line.len(), "received request");

                let response = match serde_json::from_str::<McpRequest>(line) {
                    Ok(request) => {
                        debug!(method = %request.method, "handling request");
                        // Notifications get no response
                        if request.id.is_none() {
                            handle_request(&server, &request);
                            continue;
                        }
                        handle_request(&server, &request)
                    }
                    Err(e) => {
                        warn!("Error parsing request: {}", e);
                        McpResponse {
                            jsonrpc: "2.0".to_string(),
                            id: None,
                            result: None,
                            error: Some(McpError {
                                code: -32700,
                                message: format!("Parse error: {}", e),
                                data: None,
                            }),
                        }
                    }
                };

                if let Err(e) = send(&mut stdout, &response) {
                    error!("Error writing response: {}", e);
                    break;
                }
            }
            Err(e) => {
                error!("Error reading stdin: {}", e);
                break;
            }
        }
    }

    info!("Server shutting down");
}

fn send(out: &mut impl Write, response: &McpResponse) -> io::Result<()> {
    let text = serde_json::to_string(response)?;
    writeln!(out, "{}", text)?;
    out.flush()
}

fn handle_request(server: &Server, request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" | "notifications/initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(server, &request.params),

        _ => Err(McpError {
            code: -32601,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    match result {
        Ok(r) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: Some(r),
            error: None,
        },
        Err(e) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: None,
            error: Some(e),
        },
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "Client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Step-by-step solver for small square linear systems"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Linsolve solves square linear systems Ax = b with the inverse matrix method, Cramer's rule or Gauss-Jordan elimination and explains every step. Use 'list_methods' to see the methods and 'example' for a ready-made system. Show the returned markdown to the user as received."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    Ok(json!({
        "tools": [
            {
                "name": "solve",
                "description": "Solve a square linear system Ax = b. Returns the solution, the determinant (inverse and Cramer only), a step-by-step derivation and a substitution check.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "coefficients": {
                            "type": "array",
                            "description": "Rows of A. Cells may be numbers or text; text that does not start with a number counts as 0.",
                            "items": {
                                "type": "array",
                                "items": { "type": ["number", "string"] }
                            }
                        },
                        "constants": {
                            "type": "array",
                            "description": "Right-hand side b, one entry per row",
                            "items": { "type": ["number", "string"] }
                        },
                        "method": {
                            "type": "string",
                            "description": "inverse, cramer or gauss-jordan (defaults to the server setting)"
                        },
                        "language": {
                            "type": "string",
                            "description": "Narration language: en or es"
                        },
                        "verify": {
                            "type": "boolean",
                            "description": "Include the substitution check (default true)"
                        },
                        "strict": {
                            "type": "boolean",
                            "description": "Reject text cells that are not plain numbers instead of reading them as 0 (default false)"
                        }
                    },
                    "required": ["coefficients", "constants"]
                }
            },
            {
                "name": "example",
                "description": "Get a built-in example system of the given size (2, 3 or 4).",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "size": {
                            "type": "integer",
                            "description": "Number of equations"
                        }
                    },
                    "required": ["size"]
                }
            },
            {
                "name": "list_methods",
                "description": "List the available solving methods with their aliases.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "help",
                "description": "Get documentation for a solving method, or general usage without a name.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "Method name or alias"
                        }
                    }
                }
            }
        ]
    }))
}

fn handle_tool_call(server: &Server, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        "solve" => tool_solve(server, &args),
        "example" => tool_example(&args),
        "list_methods" => tool_list_methods(server),
        "help" => tool_help(server, &args),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

/// Form text for one JSON cell; anything but a number or string is blank
fn cell_text(cell: &JsonValue) -> String {
    match cell {
        JsonValue::Number(n) => n.to_string(),
        JsonValue::String(s) => s.clone(),
        _ => String::new(),
    }
}

fn parse_system(args: &JsonValue) -> Result<SystemInput, McpError> {
    let coefficients = args.get("coefficients")
        .and_then(|v| v.as_array())
        .ok_or_else(|| McpError::invalid_params("Missing 'coefficients' (array of rows)"))?
        .iter()
        .map(|row| {
            row.as_array()
                .map(|cells| cells.iter().map(cell_text).collect())
                .ok_or_else(|| McpError::invalid_params("Each coefficient row must be an array"))
        })
        .collect::<Result<Vec<Vec<String>>, _>>()?;

    let constants = args.get("constants")
        .and_then(|v| v.as_array())
        .ok_or_else(|| McpError::invalid_params("Missing 'constants' (array)"))?
        .iter()
        .map(cell_text)
        .collect();

    Ok(SystemInput { coefficients, constants })
}

fn tool_solve(server: &Server, args: &JsonValue) -> Result<JsonValue, McpError> {
    let input = parse_system(args)?;

    let method = args.get("method")
        .and_then(|v| v.as_str())
        .unwrap_or(&server.default_method);

    let engine = match args.get("language").and_then(|v| v.as_str()) {
        Some(code) => {
            let language = Language::from_str(code).ok_or_else(|| {
                McpError::invalid_params(format!("Unknown language '{}', use 'en' or 'es'", code))
            })?;
            server.engine.clone().with_language(language)
        }
        None => server.engine.clone(),
    };

    let strict = args.get("strict")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    let engine = engine.with_strict_entries(strict);

    let include_verification = args.get("verify")
        .and_then(|v| v.as_bool())
        .unwrap_or(true);

    match engine.solve_input(method, &input) {
        Ok(report) => {
            let (markdown, verification) = if include_verification {
                (report.markdown, json!(report.verification))
            } else {
                let markdown = Renderer::new(engine.narrator()).render(&report.solution, None);
                (markdown, JsonValue::Null)
            };

            Ok(json!({
                "content": [{ "type": "text", "text": markdown }],
                "method": report.solution.method,
                "variables": report.solution.variables,
                "determinant": report.solution.determinant,
                "steps": report.steps,
                "trace": report.solution.trace,
                "verification": verification,
                "isError": false
            }))
        }
        Err(e) => Ok(json!({
            "content": [{ "type": "text", "text": engine.render_error(&e) }],
            "errors": [e],
            "isError": true
        })),
    }
}

fn tool_example(args: &JsonValue) -> Result<JsonValue, McpError> {
    let size = args.get("size")
        .and_then(|v| v.as_u64())
        .ok_or_else(|| McpError::invalid_params("Missing 'size' (integer)"))?;

    let input = usize::try_from(size)
        .ok()
        .and_then(example_system)
        .ok_or_else(|| McpError::invalid_params(format!("No example of size {}, use 2, 3 or 4", size)))?;

    let preview = input.equation_preview();
    Ok(json!({
        "content": [{ "type": "text", "text": preview.join("\n") }],
        "coefficients": input.coefficients,
        "constants": input.constants,
        "isError": false
    }))
}

fn tool_list_methods(server: &Server) -> Result<JsonValue, McpError> {
    let methods = server.engine.list_methods();
    let mut text = String::from("| method | label | aliases |\n|--------|-------|---------|\n");
    for m in &methods {
        text.push_str(&format!("| {} | {} | {} |\n", m.name, m.label, m.aliases.join(", ")));
    }

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "methods": methods,
        "default": server.default_method,
        "isError": false
    }))
}

fn tool_help(server: &Server, args: &JsonValue) -> Result<JsonValue, McpError> {
    let name = args.get("name").and_then(|v| v.as_str());
    match server.engine.help(name) {
        Ok(help) => Ok(json!({
            "content": [{ "type": "text", "text": serde_json::to_string_pretty(&help).unwrap_or_default() }],
            "help": help,
            "isError": false
        })),
        Err(e) => Ok(json!({
            "content": [{ "type": "text", "text": server.engine.render_error(&e) }],
            "errors": [e],
            "isError": true
        })),
    }
}
