//! Service modules against a mock API server.

use campus_admin::AppError;
use campus_admin::client::ApiClient;
use campus_admin::config::ApiConfig;
use campus_admin::models::{
    Classroom, College, CreateCollege, DegreeType, ProgramLevel, ProgramTerm, StaffPosition, UpdateClassroom,
};
use campus_admin::services::{
    self, classrooms, colleges, departments, program_courses, program_levels, program_terms, programs, staff,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let config = ApiConfig {
        base_url: format!("{}/api", server.uri()),
        token: None,
        timeout_secs: 5,
    };
    let client = ApiClient::new(&config).unwrap();
    (server, client)
}

fn term(id: i32, level_id: Option<i32>) -> ProgramTerm {
    ProgramTerm {
        id,
        program_id: 1,
        level_id,
        name: format!("Term {id}"),
        term_number: id as u8,
    }
}

#[tokio::test]
async fn test_create_posts_snake_case() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/colleges/"))
        .and(body_json(json!({
            "name": "Engineering",
            "code": "ENG",
            "dean_name": "Dr. Okafor",
            "is_active": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 11,
            "name": "Engineering",
            "code": "ENG",
            "deanName": "Dr. Okafor",
            "isActive": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let data = CreateCollege {
        name: "Engineering".to_string(),
        code: "ENG".to_string(),
        dean_name: Some("Dr. Okafor".to_string()),
        description: None,
        is_active: true,
    };
    let created = services::create::<College>(&client, &data).await.unwrap();
    assert_eq!(created.id, 11);
    assert_eq!(created.dean_name.as_deref(), Some("Dr. Okafor"));
}

#[tokio::test]
async fn test_update_puts_only_set_fields() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/classrooms/5/"))
        .and(body_json(json!({ "is_available": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "building_id": 1,
            "room_number": "LT-1",
            "capacity": 120,
            "is_available": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let data = UpdateClassroom {
        is_available: Some(false),
        ..Default::default()
    };
    let room = services::update::<Classroom>(&client, 5, &data).await.unwrap();
    assert!(!room.is_available);
}

#[tokio::test]
async fn test_delete() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/api/colleges/3/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    services::delete::<College>(&client, 3).await.unwrap();
}

#[tokio::test]
async fn test_list_colleges() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/colleges/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Engineering", "code": "ENG" },
            { "id": 2, "name": "Sciences", "code": "SCI" }
        ])))
        .mount(&server)
        .await;

    let list = colleges::list(&client).await.unwrap();
    assert_eq!(list.len(), 2);
}

#[tokio::test]
async fn test_list_by_building_sends_query() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/classrooms/"))
        .and(query_param("building_id", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 9, "building_id": 4, "room_number": "A-12", "capacity": 30 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let rooms = classrooms::list_by_building(&client, 4).await.unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].building_id, 4);
}

#[tokio::test]
async fn test_levels_sorted_by_number() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/program-levels/"))
        .and(query_param("program_id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 2, "program_id": 1, "name": "200 Level", "level_number": 2 },
            { "id": 1, "program_id": 1, "name": "100 Level", "level_number": 1 }
        ])))
        .mount(&server)
        .await;

    let levels = program_levels::list_by_program(&client, 1).await.unwrap();
    let numbers: Vec<u8> = levels.iter().map(|l| l.level_number).collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[tokio::test]
async fn test_assign_to_level_sends_level_id() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/program-terms/3/"))
        .and(body_json(json!({ "level_id": 1 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "program_id": 1, "level_id": 1, "name": "Term 3", "term_number": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let level = ProgramLevel {
        id: 1,
        program_id: 1,
        name: "100 Level".to_string(),
        level_number: 1,
    };
    let terms = vec![term(1, Some(1)), term(3, None)];
    let updated = program_terms::assign_to_level(&client, &terms, &terms[1], &level)
        .await
        .unwrap();
    assert_eq!(updated.level_id, Some(1));
}

#[tokio::test]
async fn test_third_term_rejected_without_request() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let level = ProgramLevel {
        id: 1,
        program_id: 1,
        name: "100 Level".to_string(),
        level_number: 1,
    };
    let terms = vec![term(1, Some(1)), term(2, Some(1)), term(3, None)];
    let err = program_terms::assign_to_level(&client, &terms, &terms[2], &level)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_unassign_sends_null_level() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/program-terms/2/"))
        .and(body_json(json!({ "level_id": null })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2, "program_id": 1, "level_id": null, "name": "Term 2", "term_number": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let updated = program_terms::unassign_level(&client, 2).await.unwrap();
    assert_eq!(updated.level_id, None);
}

#[tokio::test]
async fn test_get_fetches_single_record() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/colleges/4/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4,
            "name": "Law",
            "code": "LAW",
            "dean_name": null,
            "is_active": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let college = services::get::<College>(&client, 4).await.unwrap();
    assert_eq!(college.id, 4);
    assert_eq!(college.code, "LAW");
    assert!(college.dean_name.is_none());
    assert!(!college.is_active);
}

#[tokio::test]
async fn test_departments_by_college_sends_query() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/departments/"))
        .and(query_param("college_id", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 5, "college_id": 2, "name": "Civil Engineering", "code": "CVE", "head_name": "Prof. Eze"},
            {"id": 6, "collegeId": 2, "name": "Mechanical Engineering", "code": "MEE", "isActive": false}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let items = departments::list_by_college(&client, 2).await.unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|d| d.college_id == 2));
    assert_eq!(items[0].head_name.as_deref(), Some("Prof. Eze"));
    assert!(items[0].is_active);
    assert!(!items[1].is_active);
}

#[tokio::test]
async fn test_programs_by_department_sends_query() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/programs/"))
        .and(query_param("department_id", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "id": 9,
                "department_id": 5,
                "name": "B.Eng Civil Engineering",
                "code": "BCV",
                "degree_type": "master",
                "duration_years": 2
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = programs::list_by_department(&client, 5).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].department_id, 5);
    assert_eq!(items[0].degree_type, DegreeType::Master);
    assert_eq!(items[0].duration_years, 2);
}

#[tokio::test]
async fn test_staff_by_department_sends_query() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/staff/"))
        .and(query_param("department_id", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 3,
            "staff_number": "STF-003",
            "firstName": "Ada",
            "lastName": "Nwosu",
            "email": "ada@uni.edu",
            "departmentId": 5,
            "position": "professor"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let items = staff::list_by_department(&client, 5).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].department_id, Some(5));
    assert_eq!(items[0].first_name, "Ada");
    assert_eq!(items[0].position, StaffPosition::Professor);
}

#[tokio::test]
async fn test_courses_by_term_and_program_send_query() {
    let (server, client) = setup().await;
    let course = |id: i32, term_id: i32| {
        json!({
            "id": id,
            "program_id": 1,
            "term_id": term_id,
            "course_code": format!("CVE{id}"),
            "course_title": "Statics",
            "credit_units": 3,
            "is_elective": id % 2 == 0
        })
    };
    Mock::given(method("GET"))
        .and(path("/api/program-courses/"))
        .and(query_param("term_id", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([course(101, 7)])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/program-courses/"))
        .and(query_param("program_id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [course(101, 7), course(102, 8)]})))
        .expect(1)
        .mount(&server)
        .await;

    let by_term = program_courses::list_by_term(&client, 7).await.unwrap();
    assert_eq!(by_term.len(), 1);
    assert_eq!(by_term[0].course_code, "CVE101");
    assert_eq!(by_term[0].credit_units, 3);
    assert!(!by_term[0].is_elective);

    let by_program = program_courses::list_by_program(&client, 1).await.unwrap();
    let ids: Vec<_> = by_program.iter().map(|c| (c.id, c.term_id)).collect();
    assert_eq!(ids, [(101, 7), (102, 8)]);
    assert!(by_program[1].is_elective);
}

#[tokio::test]
async fn test_terms_by_program_sorted_by_number() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/program-terms/"))
        .and(query_param("program_id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 13, "program_id": 1, "level_id": 2, "name": "Third", "term_number": 3},
            {"id": 11, "program_id": 1, "level_id": 1, "name": "First", "term_number": 1},
            {"id": 12, "programId": 1, "levelId": null, "name": "Second", "termNumber": 2}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let terms = program_terms::list_by_program(&client, 1).await.unwrap();
    let numbers: Vec<_> = terms.iter().map(|t| t.term_number).collect();
    assert_eq!(numbers, [1, 2, 3]);
    assert_eq!(terms[1].level_id, None);
    assert_eq!(terms[2].level_id, Some(2));
}
