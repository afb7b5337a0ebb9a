use anyhow::Result;

fn main() -> Result<()> {
    compiler_c_unary::driver::driver_main()
}
