use super::common;

use common::test_server::TestServer;
use schemock::adapters::render::render_document;
use schemock::config::{FetchSettings, OutputFormat};
use schemock::{Annotator, AnnotatorOptions, DocumentLoader};
use serde_json::{json, Value};

fn example_of(value: &Value) -> Value {
    let text = value["example"].as_str().expect("example should be a JSON string");
    serde_json::from_str(text).unwrap()
}

async fn load(path: &str) -> Value {
    let server = TestServer::new().await;
    let loader = DocumentLoader::new(&FetchSettings::default()).unwrap();
    loader.load(&server.url(path)).await.unwrap()
}

#[tokio::test]
async fn test_annotate_remote_petstore() {
    let mut document = load("/petstore.yaml").await;
    let report = Annotator::new(AnnotatorOptions::default())
        .annotate(&mut document)
        .unwrap();

    let pet = json!({
        "id": "@integer(10, 100)",
        "name": "@string",
        "status": "pending",
        "tag": "@string"
    });

    let pets = &document["paths"]["/pets"];
    assert_eq!(example_of(&pets["get"]["responses"]["200"]), json!([pet]));
    assert_eq!(
        example_of(&pets["get"]["responses"]["default"]),
        json!({ "code": "@integer(10, 100)", "message": "@sentence" })
    );
    assert_eq!(example_of(&pets["get"]["parameters"][0]), json!("@integer(10, 100)"));
    assert_eq!(pets["post"]["responses"]["201"]["example"], Value::Null);

    let pet_by_id = &document["paths"]["/pets/{petId}"];
    assert_eq!(example_of(&pet_by_id["parameters"][0]), json!("@string"));
    assert_eq!(example_of(&pet_by_id["get"]["responses"]["200"]), pet);

    assert_eq!(report.operations, 3);
    assert_eq!(report.responses, 4);
    assert_eq!(report.parameters, 2);
    assert_eq!(report.without_sample, 1);
}

#[tokio::test]
async fn test_annotate_remote_openapi3() {
    let mut document = load("/users.json").await;
    Annotator::new(AnnotatorOptions::default())
        .annotate(&mut document)
        .unwrap();

    let user = json!({
        "id": "@id",
        "email": "@email",
        "joined": "@datetime",
        "avatar": "@image(\"200x200\", \"#50B347\", \"#FFF\", \"Avatar\")",
        "attributes": {
            "additionalProp1": "@string",
            "additionalProp2": "@string",
            "additionalProp3": "@string"
        }
    });

    let users = &document["paths"]["/users"]["get"];
    assert_eq!(example_of(&users["responses"]["200"]), json!([user]));
    assert_eq!(example_of(&users["parameters"][0]), json!("@boolean"));

    let by_id = &document["paths"]["/users/{id}"]["get"];
    assert_eq!(by_id["parameters"][0]["name"], json!("id"));
    assert_eq!(example_of(&by_id["parameters"][0]), json!("@string"));
    assert_eq!(example_of(&by_id["responses"]["200"]), user);
    assert_eq!(
        example_of(&by_id["responses"]["404"]),
        json!({ "message": "@sentence" })
    );
}

#[tokio::test]
async fn test_annotated_document_renders_as_yaml() {
    let mut document = load("/petstore.yaml").await;
    Annotator::new(AnnotatorOptions::default())
        .annotate(&mut document)
        .unwrap();

    let text = render_document(&document, OutputFormat::Yaml).unwrap();
    let reparsed: Value = serde_yaml::from_str(&text).unwrap();
    assert_eq!(reparsed, document);
}
