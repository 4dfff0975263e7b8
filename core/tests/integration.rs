//! End-to-end scenario against a live server.
//!
//! Starts the server on a random port, then drives every client operation
//! over real HTTP with ureq.

use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, TodoClient, TodoCreate};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// 4xx/5xx responses come back as data rather than `Err`, leaving status
/// interpretation to the client.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.url).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.url).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.url).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse::new(status, body)
}

fn spawn_server() -> TodoClient {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener).await
        })
        .unwrap();
    });

    TodoClient::new(&format!("http://{addr}"))
}

#[test]
fn crud_lifecycle() {
    let client = spawn_server();

    // greeting
    let greeting = client.parse_greeting(execute(client.build_greeting())).unwrap();
    assert_eq!(greeting.message, "Welcome to the To-Do List API!");

    // list: only the seeded records
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(todos.keys().copied().collect::<Vec<_>>(), vec![1, 2]);

    // create
    let req = client.build_create_todo(&TodoCreate::new("Buy milk")).unwrap();
    let created = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(created.id, 3);
    assert_eq!(created.title, "Buy milk");
    assert!(created.description.is_none());
    assert!(!created.completed);

    // get
    let fetched = client.parse_get_todo(execute(client.build_get_todo(3))).unwrap();
    assert_eq!(fetched, created);

    // update
    let req = client
        .build_update_todo(3, &TodoCreate::new("Buy milk and eggs"))
        .unwrap();
    let updated = client.parse_update_todo(execute(req)).unwrap();
    assert_eq!(updated.id, 3);
    assert_eq!(updated.title, "Buy milk and eggs");
    assert!(updated.description.is_none());
    assert!(!updated.completed);

    // delete
    client.parse_delete_todo(execute(client.build_delete_todo(3))).unwrap();

    // get after delete
    let err = client.parse_get_todo(execute(client.build_get_todo(3))).unwrap_err();
    assert!(matches!(err, ApiError::NotFound(ref detail) if detail == "Todo not found: 3"));

    // delete again
    let err = client.parse_delete_todo(execute(client.build_delete_todo(3))).unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    // update a missing record
    let req = client.build_update_todo(3, &TodoCreate::new("ghost")).unwrap();
    let err = client.parse_update_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    // invalid payload is rejected by the server
    let req = client.build_create_todo(&TodoCreate::new("")).unwrap();
    let err = client.parse_create_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::HttpError { status: 422, .. }));

    // list is back to the seeds
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(todos.len(), 2);
}
