//! Error report population from arbitrary input.

use tracing::debug;

use crate::classify::{classify, Shape};
use crate::inspect::inspect;
use crate::sink::ReportSink;
use crate::trace::build_trace;
use crate::value::RawValue;

/// Marshal an arbitrary value into a report sink.
///
/// The input is classified (see [`classify`]) and the matching fields are
/// copied into `report`. Properties are copied when they are not undefined,
/// so `0`, `""` and `false` survive. No type checks happen here: values go to
/// the sink as-is and only the sink's setters can fail. On success the sink
/// always holds a message.
pub fn populate<'r, S: ReportSink>(
    input: &RawValue,
    report: &'r mut S,
) -> Result<&'r mut S, S::Error> {
    let shape = classify(input);
    debug!(shape = shape.label(), input_type = input.type_name(), "Populating error report");

    match shape {
        Shape::Nullish(value) | Shape::Other(value) => {
            report.set_message(&RawValue::String(build_trace(&value.to_js_string())))?;
        }
        Shape::ErrorLike { stack, value } => populate_from_error(stack, value, report)?,
        Shape::PlainObject(value) => populate_from_object(value, report)?,
    }

    Ok(report)
}

fn populate_from_error<S: ReportSink>(
    stack: &RawValue,
    err: &RawValue,
    report: &mut S,
) -> Result<(), S::Error> {
    report.set_message(stack)?;

    let user = err.get("user");
    if !user.is_undefined() {
        report.set_user(user)?;
    }

    copy_service_context(err, report)
}

fn populate_from_object<S: ReportSink>(ob: &RawValue, report: &mut S) -> Result<(), S::Error> {
    let message = ob.get("message");
    if message.is_undefined() {
        report.set_message(&RawValue::String(build_trace(&inspect(ob))))?;
    } else {
        report.set_message(message)?;
    }

    let user = ob.get("user");
    if !user.is_undefined() {
        report.set_user(user)?;
    }

    let file_path = ob.get("filePath");
    if !file_path.is_undefined() {
        report.set_file_path(file_path)?;
    }

    let line_number = ob.get("lineNumber");
    if !line_number.is_undefined() {
        report.set_line_number(line_number)?;
    }

    let function_name = ob.get("functionName");
    if !function_name.is_undefined() {
        report.set_function_name(function_name)?;
    }

    copy_service_context(ob, report)
}

/// Copies `serviceContext.service` / `.version` when `serviceContext` is a
/// plain record; anything else is ignored.
fn copy_service_context<S: ReportSink>(ob: &RawValue, report: &mut S) -> Result<(), S::Error> {
    let context = ob.get("serviceContext");
    if context.is_undefined() || !context.has_object_tag() {
        return Ok(());
    }
    report.set_service_context(context.get("service"), context.get("version"))
}
