#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::interrupt::software::SoftwareInterruptControl;
use esp_hal::system::Stack;
use esp_hal::timer::timg::TimerGroup;
use esp_rtos::embassy::Executor;
use log::info;

use signal_esp_light::infrastructure::config::ANIMATION_CORE_STACK_SIZE;
use signal_esp_light::infrastructure::tasks::{
    animation_task, init_animation, init_serial_commands, serial_command_task,
};
use signal_esp_light::{led_gpio, mk_static, serial_rx_gpio};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Render on the app core so strip timing is not disturbed by serial handling
    let driver = init_animation(peripherals.RMT, led_gpio!(peripherals));
    let sw_int = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    let app_core_stack = mk_static!(
        Stack<ANIMATION_CORE_STACK_SIZE>,
        Stack::new()
    );
    esp_rtos::start_second_core(
        peripherals.CPU_CTRL,
        sw_int.software_interrupt0,
        app_core_stack,
        move || {
            let executor = mk_static!(Executor, Executor::new());
            executor.run(|spawner| {
                spawner.spawn(animation_task(driver)).ok();
            });
        },
    );

    // Serial commands stay on the main core
    let rx = init_serial_commands(peripherals.UART0, serial_rx_gpio!(peripherals));
    spawner.spawn(serial_command_task(rx)).ok();

    info!("boot: tasks started");

    loop {
        Timer::after(Duration::from_secs(5)).await;
    }
}
