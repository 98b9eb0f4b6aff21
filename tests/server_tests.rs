use actix_web::{test, web, App};
use serde_json::{json, Value};
use timetabler::server::{configure, AppState};
use timetabler::SearchLimits;

fn state(limits: SearchLimits) -> web::Data<AppState> {
    web::Data::new(AppState::new(limits, 2))
}

fn sample_body(no_friday: bool) -> Value {
    json!({
        "courses": [
            {
                "courseId": "MATH340",
                "name": "Elementary Matrix and Linear Algebra",
                "sections": [
                    { "sectionId": "MATH340-LEC-001", "times": [
                        { "day": "Mon", "start": "09:55", "end": "10:45" },
                        { "day": "Wed", "start": "09:55", "end": "10:45" },
                        { "day": "Fri", "start": "09:55", "end": "10:45" }
                    ]},
                    { "sectionId": "MATH340-LEC-002", "times": [
                        { "day": "Tue", "start": "13:00", "end": "14:15" },
                        { "day": "Thu", "start": "13:00", "end": "14:15" }
                    ]}
                ]
            },
            {
                "courseId": "CS400",
                "name": "Programming III",
                "sections": [
                    { "sectionId": "CS400-LEC-001", "times": [
                        { "day": "Mon", "start": "11:00", "end": "12:15" },
                        { "day": "Wed", "start": "11:00", "end": "12:15" }
                    ]},
                    { "sectionId": "CS400-LEC-002", "times": [
                        { "day": "Tue", "start": "15:00", "end": "16:15" },
                        { "day": "Thu", "start": "15:00", "end": "16:15" }
                    ]}
                ]
            }
        ],
        "preferences": { "earliest": "08:00", "latest": "18:00", "noFriday": no_friday }
    })
}

#[actix_web::test]
async fn test_post_schedules() {
    let app = test::init_service(App::new().app_data(state(SearchLimits::unbounded())).configure(configure)).await;

    let req = test::TestRequest::post().uri("/api/schedules").set_json(sample_body(false)).to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["count"], 4);
    assert_eq!(resp["schedules"].as_array().unwrap().len(), 4);

    let req = test::TestRequest::post().uri("/api/schedules").set_json(sample_body(true)).to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["count"], 2);
}

#[actix_web::test]
async fn test_post_schedules_sin_cursos() {
    let app = test::init_service(App::new().app_data(state(SearchLimits::unbounded())).configure(configure)).await;

    for body in [json!({}), json!({"courses": []})] {
        let req = test::TestRequest::post().uri("/api/schedules").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "No courses provided");
    }
}

#[actix_web::test]
async fn test_post_schedules_hora_invalida() {
    let app = test::init_service(App::new().app_data(state(SearchLimits::unbounded())).configure(configure)).await;

    let mut body = sample_body(false);
    body["courses"][0]["sections"][0]["times"][0]["start"] = json!("9h55");
    let req = test::TestRequest::post().uri("/api/schedules").set_json(body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("9h55"));
}

#[actix_web::test]
async fn test_post_schedules_truncado() {
    let limits = SearchLimits { max_results: Some(2), max_nodes: None };
    let app = test::init_service(App::new().app_data(state(limits)).configure(configure)).await;

    let req = test::TestRequest::post().uri("/api/schedules").set_json(sample_body(false)).to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["count"], 2);
    assert_eq!(resp["truncated"], "maxResults");
}

#[actix_web::test]
async fn test_get_courses() {
    let app = test::init_service(App::new().app_data(state(SearchLimits::unbounded())).configure(configure)).await;

    let req = test::TestRequest::get().uri("/api/courses").to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        resp,
        json!([
            {"courseId": "MATH340", "name": "Elementary Matrix and Linear Algebra"},
            {"courseId": "CS400", "name": "Programming III"},
            {"courseId": "STAT324", "name": "Introductory Probability"}
        ])
    );

    let req = test::TestRequest::get().uri("/api/courses/full").to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp[2]["sections"][0]["sectionId"], "STAT324-LEC-001");
}

#[actix_web::test]
async fn test_post_merge() {
    let app = test::init_service(App::new().app_data(state(SearchLimits::unbounded())).configure(configure)).await;

    let body = json!({
        "existing": [{"courseId": "MATH340", "name": "Linear Algebra", "sections": [{"sectionId": "LEC 001", "times": []}]}],
        "incoming": [
            {"courseId": "MATH340", "name": "MATH 340", "sections": [
                {"sectionId": "LEC 001", "times": []},
                {"sectionId": "LEC 002", "times": [{"day": "Tue", "start": "13:00", "end": "14:15", "label": "LEC 002"}]}
            ]},
            {"courseId": "ATMOCN101", "name": "ATM OCN 101", "sections": []}
        ]
    });
    let req = test::TestRequest::post().uri("/api/courses/merge").set_json(body).to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.as_array().unwrap().len(), 2);
    assert_eq!(resp[0]["name"], "Linear Algebra");
    assert_eq!(resp[0]["sections"].as_array().unwrap().len(), 2);
    assert_eq!(resp[0]["sections"][1]["times"][0]["label"], "LEC 002");
    assert_eq!(resp[1]["courseId"], "ATMOCN101");
}

#[actix_web::test]
async fn test_get_help() {
    let app = test::init_service(App::new().app_data(state(SearchLimits::unbounded())).configure(configure)).await;

    let req = test::TestRequest::get().uri("/help").to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["post_example"]["courses"].as_array().unwrap().len(), 2);
    assert_eq!(resp["post_example"]["preferences"]["earliest"], "08:00");
}
