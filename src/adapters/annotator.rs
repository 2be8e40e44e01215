use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use tracing::{debug, info, warn};

use crate::adapters::ref_resolver::RefResolver;
use crate::adapters::synthesizer::SampleGenerator;
use crate::config::SampleSettings;
use crate::domain::document::{infer_schema, DocumentVersion, HTTP_METHODS};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct AnnotatorOptions {
    /// Media type whose schema is sampled in OpenAPI 3 responses
    pub media_type: String,
    pub expand_placeholders: bool,
}

impl Default for AnnotatorOptions {
    fn default() -> Self {
        Self::from(&SampleSettings::default())
    }
}

impl From<&SampleSettings> for AnnotatorOptions {
    fn from(settings: &SampleSettings) -> Self {
        Self {
            media_type: settings.media_type.clone(),
            expand_placeholders: settings.expand_placeholders,
        }
    }
}

/// What one annotation run touched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationReport {
    pub operations: usize,
    pub responses: usize,
    pub parameters: usize,
    /// Responses and parameters that got a `null` example
    pub without_sample: usize,
    pub cache_hits: u64,
    pub cache_misses: u64,
}

/// Writes a sample JSON string into the `example` field of every response
/// and parameter in a Swagger 2.0 or OpenAPI 3 document.
///
/// Response and parameter objects given as local `$ref`s are replaced by
/// their resolved content before the example is written.
pub struct Annotator {
    options: AnnotatorOptions,
}

impl Annotator {
    pub fn new(options: AnnotatorOptions) -> Self {
        Self { options }
    }

    pub fn annotate(&self, document: &mut Value) -> Result<AnnotationReport> {
        let version = DocumentVersion::detect(document)?;
        info!("Annotating {:?} document", version);

        let resolver = RefResolver::new(document);
        let generator = if self.options.expand_placeholders {
            SampleGenerator::new().with_placeholder_expansion()
        } else {
            SampleGenerator::new()
        };
        let run = Run {
            version,
            media_type: &self.options.media_type,
            resolver: &resolver,
            generator: &generator,
        };
        let mut report = AnnotationReport::default();

        let Some(paths) = document.get_mut("paths").and_then(Value::as_object_mut) else {
            warn!("Document has no paths, nothing to annotate");
            return Ok(report);
        };

        for (path, item) in paths.iter_mut() {
            let Some(item) = item.as_object_mut() else {
                continue;
            };

            if let Some(parameters) = item.get_mut("parameters") {
                run.annotate_parameters(parameters, &mut report)?;
            }

            for method in HTTP_METHODS {
                let Some(operation) = item.get_mut(method).and_then(Value::as_object_mut) else {
                    continue;
                };
                debug!("Annotating {} {}", method.to_uppercase(), path);
                report.operations += 1;

                if let Some(responses) = operation.get_mut("responses").and_then(Value::as_object_mut) {
                    for (code, response) in responses.iter_mut() {
                        run.annotate_response(code, response, &mut report)?;
                    }
                }

                if let Some(parameters) = operation.get_mut("parameters") {
                    run.annotate_parameters(parameters, &mut report)?;
                }
            }
        }

        report.cache_hits = generator.cache().hits();
        report.cache_misses = generator.cache().misses();
        info!(
            "Annotated {} responses and {} parameters across {} operations ({} without sample, {} cache hits)",
            report.responses,
            report.parameters,
            report.operations,
            report.without_sample,
            report.cache_hits
        );

        Ok(report)
    }
}

/// State shared by every object annotated in one document.
struct Run<'a> {
    version: DocumentVersion,
    media_type: &'a str,
    resolver: &'a RefResolver,
    generator: &'a SampleGenerator,
}

impl Run<'_> {
    fn annotate_response(
        &self,
        code: &str,
        response: &mut Value,
        report: &mut AnnotationReport,
    ) -> Result<()> {
        self.inline_ref(response);

        let example = {
            let schema = match self.version {
                DocumentVersion::OpenApi3 => response
                    .get("content")
                    .and_then(|content| content.get(self.media_type))
                    .and_then(infer_schema),
                DocumentVersion::Swagger2 => infer_schema(response),
            };
            self.example_for(schema)?
        };

        if example.is_null() {
            debug!("No sample for response {}", code);
            report.without_sample += 1;
        }
        set_example(response, example);
        report.responses += 1;
        Ok(())
    }

    fn annotate_parameters(&self, parameters: &mut Value, report: &mut AnnotationReport) -> Result<()> {
        let Some(parameters) = parameters.as_array_mut() else {
            return Ok(());
        };

        for parameter in parameters.iter_mut() {
            self.inline_ref(parameter);

            let example = self.example_for(infer_schema(parameter))?;
            if example.is_null() {
                report.without_sample += 1;
            }
            set_example(parameter, example);
            report.parameters += 1;
        }
        Ok(())
    }

    /// Sample JSON text as a string value, `null` when there is none.
    fn example_for(&self, schema: Option<Cow<'_, Value>>) -> Result<Value> {
        let Some(schema) = schema else {
            return Ok(Value::Null);
        };

        let resolved = self.resolver.resolve(&schema);
        let sample = self.generator.sample_json(&resolved)?;
        Ok(sample.map(Value::String).unwrap_or(Value::Null))
    }

    fn inline_ref(&self, value: &mut Value) {
        if value.get("$ref").is_some_and(Value::is_string) {
            *value = self.resolver.resolve(value);
        }
    }
}

fn set_example(target: &mut Value, example: Value) {
    if let Some(object) = target.as_object_mut() {
        object.insert("example".to_string(), example);
    }
}
