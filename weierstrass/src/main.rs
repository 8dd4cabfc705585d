use std::{env, process::ExitCode};

use rand_core::OsRng;
use weierstrass_dh::{
    demo::{self, Exchange},
    AffinePoint, CurveParameters, Error, NamedCurve, Scalar, Secp256r1,
};

const USAGE: &str = "\
usage: dh-commutativity [--curve NAME] [--k SCALAR] [--d SCALAR]

Computes d·(k·G) and k·(d·G) and checks that they are the same point.
Scalars are decimal or 0x-prefixed hex; missing scalars are drawn at random.

options:
    --curve NAME   curve to use (default: secp256r1)
    --k SCALAR     first secret scalar
    --d SCALAR     second secret scalar
    -h, --help     print this message";

#[derive(Debug)]
struct Options {
    curve: NamedCurve,
    k: Option<String>,
    d: Option<String>,
}

fn main() -> ExitCode {
    let options = match parse_args(env::args().skip(1)) {
        Ok(Some(options)) => options,
        Ok(None) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("error: {}\n\n{}", msg, USAGE);
            return ExitCode::from(2);
        }
    };

    let result = match options.curve {
        NamedCurve::Secp256r1 => run::<Secp256r1>(&options),
    };

    match result {
        Ok(exchange) => {
            report(&exchange);
            if exchange.agreed() && exchange.all_on_curve() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Options>, String> {
    let mut options = Options {
        curve: NamedCurve::Secp256r1,
        k: None,
        d: None,
    };

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) => (flag.to_owned(), Some(value.to_owned())),
            None => (arg, None),
        };

        if flag == "-h" || flag == "--help" {
            return Ok(None);
        }

        let value = match inline.or_else(|| args.next()) {
            Some(value) => value,
            None => return Err(format!("missing value for {}", flag)),
        };

        match flag.as_str() {
            "--curve" => {
                options.curve = value
                    .parse()
                    .map_err(|err: Error| format!("{}: {}", err, value))?;
            }
            "--k" => options.k = Some(value),
            "--d" => options.d = Some(value),
            _ => return Err(format!("unrecognized argument: {}", flag)),
        }
    }

    Ok(Some(options))
}

fn run<C: CurveParameters>(options: &Options) -> Result<Exchange<C>, Error> {
    let k = scalar_or_random::<C>(options.k.as_deref())?;
    let d = scalar_or_random::<C>(options.d.as_deref())?;

    println!("curve: {}", C::NAME);
    demo::exchange(&k, &d)
}

fn scalar_or_random<C: CurveParameters>(input: Option<&str>) -> Result<Scalar<C>, Error> {
    match input {
        Some(s) => s.parse(),
        None => Scalar::random(&mut OsRng),
    }
}

fn report<C: CurveParameters>(exchange: &Exchange<C>) {
    print_point("k·G", &exchange.public_k);
    print_point("d·G", &exchange.public_d);
    print_point("d·(k·G)", &exchange.shared_a);
    print_point("k·(d·G)", &exchange.shared_b);

    println!("k·G on curve: {}", exchange.public_k_on_curve());
    println!("d·G on curve: {}", exchange.public_d_on_curve());
    println!("d·(k·G) on curve: {}", exchange.shared_a_on_curve());
    println!("k·(d·G) on curve: {}", exchange.shared_b_on_curve());
    println!("all points on curve: {}", exchange.all_on_curve());
    println!("agreed: {}", exchange.agreed());
}

fn print_point<C: CurveParameters>(label: &str, point: &AffinePoint<C>) {
    println!("===========================");
    println!("{} coordinates:", label);
    match point.coordinates() {
        Some((x, y)) => {
            println!("X: {}", x);
            println!("Y: {}", y);
        }
        None => println!("point at infinity"),
    }
}
