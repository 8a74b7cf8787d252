use crate::dense::matrix::DenseMatrix;
use crate::errors::LinAlgError;
use crate::extras::norm::{NormType, condition_number_lu};
use crate::lu::solve::{SolveResult, solve_default};
use log::info;
use nalgebra::DVector;
use regex::Regex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// output precision (significant digits after the point)
const PRECISION: usize = 12;

fn next_token<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<&'a str, LinAlgError> {
    tokens
        .next()
        .ok_or_else(|| LinAlgError::BadFormat(format!("unexpected end of input while reading {}", what)))
}

fn next_usize<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<usize, LinAlgError> {
    next_token(tokens, what)?
        .parse()
        .map_err(|_| LinAlgError::BadFormat(format!("couldn't parse {}", what)))
}

fn next_f64<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<f64, LinAlgError> {
    next_token(tokens, what)?
        .parse()
        .map_err(|_| LinAlgError::BadFormat(format!("couldn't parse {}", what)))
}

/// Read a matrix from a sparse triple list: a header with the dimension `n`
/// and the entry count `m`, then m `(row, col, value)` triples. Unlisted
/// entries are zero.
pub fn read_matrix<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<DenseMatrix, LinAlgError> {
    let n = next_usize(tokens, "matrix dimension")?;
    let m = next_usize(tokens, "matrix entry count")?;
    if m > n * n {
        return Err(LinAlgError::BadFormat(
            "number of elements larger than n^2 while reading matrix".to_string(),
        ));
    }

    let mut mat = DenseMatrix::zeros(n);
    for _ in 0..m {
        let i = next_usize(tokens, "matrix row index")?;
        let j = next_usize(tokens, "matrix column index")?;
        let value = next_f64(tokens, "matrix entry")?;
        mat.set(i, j, value)
            .map_err(|_| LinAlgError::BadFormat(format!("matrix entry ({}, {}) out of range", i, j)))?;
    }
    Ok(mat)
}

/// Read a length-n vector from a sparse `(index, value)` list headed by the
/// entry count
pub fn read_vector<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    n: usize,
) -> Result<DVector<f64>, LinAlgError> {
    let k = next_usize(tokens, "vector entry count")?;
    let mut vec = DVector::zeros(n);
    for _ in 0..k {
        let i = next_usize(tokens, "vector index")?;
        if i >= n {
            return Err(LinAlgError::BadFormat(format!(
                "vector index {} out of range for dimension {}",
                i, n
            )));
        }
        vec[i] = next_f64(tokens, "vector entry")?;
    }
    Ok(vec)
}

/// bare file name without directories or extension
pub fn file_stem(path: &str) -> String {
    // same pattern the old tool used to derive output names
    let regex = Regex::new(r"^.*?[/\\]?(\w+)(\.\w+)?$").expect("file stem pattern is valid");
    match regex.captures(path) {
        Some(caps) => caps[1].to_string(),
        None => String::new(),
    }
}

pub fn output_name(path: &str) -> String {
    format!("SOLUTION_{}.DAT", file_stem(path))
}

fn write_info_number(out: &mut impl Write, title: &str, value: f64) -> std::io::Result<()> {
    writeln!(out, "{}: {:.prec$e}\n", title, value, prec = PRECISION)
}

fn write_float_vector(
    out: &mut impl Write,
    vec: &DVector<f64>,
    title: Option<&str>,
) -> std::io::Result<()> {
    if let Some(title) = title {
        writeln!(out, "{}:", title)?;
    }
    let width = vec.len().to_string().len();
    for (i, value) in vec.iter().enumerate() {
        let sign_pad = if *value >= 0.0 { " " } else { "" };
        writeln!(out, "{:>width$} \t{}{:.prec$e}", i, sign_pad, value, width = width, prec = PRECISION)?;
    }
    writeln!(out)
}

/// Write the solution report: solution vector, residual, both condition
/// numbers and the permutation vector.
pub fn write_solution(
    out: &mut impl Write,
    result: &SolveResult,
    cond1: f64,
    cond_inf: f64,
) -> Result<(), LinAlgError> {
    write_float_vector(out, result.solution()?, None).map_err(io_err)?;
    write_info_number(out, "residue", result.residual()).map_err(io_err)?;
    write_info_number(out, "condition number mu_1", cond1).map_err(io_err)?;
    write_info_number(out, "condition number mu_Inf", cond_inf).map_err(io_err)?;

    let perm = result.lu()?.perm().vector();
    writeln!(out, "permutation vector:").map_err(io_err)?;
    let width = perm.len().to_string().len();
    for (i, p) in perm.iter().enumerate() {
        writeln!(out, "{:>width$} \t {}", i, p, width = width).map_err(io_err)?;
    }
    Ok(())
}

fn io_err(e: std::io::Error) -> LinAlgError {
    LinAlgError::IoError(e.to_string())
}

/// Solve the system stored in a sparse-triple text file and write the
/// report to `SOLUTION_<stem>.DAT` next to the input. Returns the path of
/// the written file.
pub fn solve_file(path: &str) -> Result<String, LinAlgError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| LinAlgError::IoError(format!("{}: {}", path, e)))?;
    let mut tokens = text.split_whitespace();

    let A = read_matrix(&mut tokens)?;
    let b = read_vector(&mut tokens, A.size())?;

    let result = solve_default(&A, &b)?;
    if !result.is_success() {
        return Err(LinAlgError::SingularMatrix { tol: result.tol() });
    }
    let lu_obj = result.lu()?;
    let cond1 = condition_number_lu(&A, lu_obj, NormType::L1)?;
    let cond_inf = condition_number_lu(&A, lu_obj, NormType::Inf)?;

    let oname = match Path::new(path).parent() {
        Some(dir) if dir != Path::new("") => dir.join(output_name(path)).to_string_lossy().into_owned(),
        _ => output_name(path),
    };
    let file = File::create(&oname).map_err(|e| LinAlgError::IoError(format!("{}: {}", oname, e)))?;
    let mut out = BufWriter::new(file);
    write_solution(&mut out, &result, cond1, cond_inf)?;
    out.flush().map_err(io_err)?;

    info!("written solution of {} to {}", path, oname);
    Ok(oname)
}
