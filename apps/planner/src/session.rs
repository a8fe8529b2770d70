//! Line-delimited JSON session between the planner and its view host.
//!
//! The first frame is the initial snapshot; after that every input line
//! yields exactly one output line.

use std::io::{self, BufRead, Write};

use planner_core::Planner;
use planner_shared::{ErrorBody, PlannerIntent, PlannerView, Reply};

use crate::handlers;

pub fn serve(
    planner: &mut Planner,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    write_frame(&mut output, &Reply::ok(PlannerView::from(&*planner)))?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        // undecodable bytes become U+FFFD and fail the JSON parse below
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<PlannerIntent>(line) {
            Ok(intent) => {
                handlers::dispatch(planner, intent);
                Reply::ok(PlannerView::from(&*planner))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rejected malformed intent");
                Reply::err(ErrorBody::bad_request(e.to_string()))
            }
        };

        write_frame(&mut output, &reply)?;
    }

    Ok(())
}

fn write_frame(output: &mut impl Write, reply: &Reply<PlannerView>) -> io::Result<()> {
    serde_json::to_writer(&mut *output, reply)?;
    output.write_all(b"\n")?;
    output.flush()
}
