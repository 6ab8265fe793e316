use crate::args::JobOp;
use anyhow::{anyhow, Context, Result};
use ordertrack_core::{raw_record_from_value, JobRecord, JobRepository, JobService, RawRecord};
use serde::Serialize;
use serde_json::Value;

/// Runs one job operation and returns its JSON output.
pub fn run_job_op<J, R>(service: &JobService<J, R>, op: JobOp) -> Result<Value>
where
    J: JobRecord + Serialize,
    R: JobRepository<J>,
{
    let kind = J::KIND;
    let output = match op {
        JobOp::List => serde_json::to_value(service.list()?)?,
        JobOp::Get { id } => {
            let job = service
                .get(&id)?
                .ok_or_else(|| anyhow!("no {kind} job with id `{id}`"))?;
            serde_json::to_value(job)?
        }
        JobOp::Insert { input } => serde_json::to_value(service.insert(&parse_input(&input)?)?)?,
        JobOp::Replace { id, input } => {
            serde_json::to_value(service.replace(&id, &parse_input(&input)?)?)?
        }
        JobOp::Delete { id } => serde_json::to_value(service.delete(&id)?)?,
    };
    Ok(output)
}

fn parse_input(input: &str) -> Result<RawRecord> {
    let value: Value = serde_json::from_str(input).context("job input is not valid JSON")?;
    Ok(raw_record_from_value(value))
}
